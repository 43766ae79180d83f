// src/services/team_picker.rs
// DOCUMENTATION: Lunch team draw
// PURPOSE: Pick two seniors and two juniors from the fixed pools, no I/O

use crate::models::Team;
use crate::services::sampling::sample;
use rand::Rng;

pub const SENIOR_POOL: [&str; 5] = ["김과장", "박차장", "이부장", "최이사", "정상무"];
pub const JUNIOR_POOL: [&str; 7] = ["민영", "유진", "지훈", "수진", "태호", "현우", "지은"];

/// Members drawn from each pool
pub const PICKS_PER_GROUP: usize = 2;

/// Draw a team using the thread-local RNG
pub fn pick_team() -> Team {
    pick_team_with(&mut rand::rng())
}

/// Draw a team with the given RNG; each pool is shuffled independently
pub fn pick_team_with<R: Rng + ?Sized>(rng: &mut R) -> Team {
    Team {
        seniors: draw(&SENIOR_POOL, rng),
        juniors: draw(&JUNIOR_POOL, rng),
    }
}

fn draw<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> Vec<String> {
    let names = pool.iter().map(|name| name.to_string()).collect();
    sample(names, PICKS_PER_GROUP, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_team_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let team = pick_team_with(&mut rng);

            assert_eq!(team.seniors.len(), 2);
            assert_ne!(team.seniors[0], team.seniors[1]);
            assert!(team.seniors.iter().all(|s| SENIOR_POOL.contains(&s.as_str())));

            assert_eq!(team.juniors.len(), 2);
            assert_ne!(team.juniors[0], team.juniors[1]);
            assert!(team.juniors.iter().all(|j| JUNIOR_POOL.contains(&j.as_str())));
        }
    }

    #[test]
    fn test_members_lists_seniors_first() {
        let mut rng = StdRng::seed_from_u64(3);
        let team = pick_team_with(&mut rng);
        let members: Vec<&str> = team.members().collect();
        assert_eq!(members.len(), 4);
        assert_eq!(members[..2], [team.seniors[0].as_str(), team.seniors[1].as_str()]);
    }

    #[test]
    fn test_repeated_picks_vary() {
        let mut pairs = HashSet::new();
        for _ in 0..50 {
            let mut seniors = pick_team().seniors;
            seniors.sort();
            pairs.insert(seniors);
        }
        assert!(pairs.len() >= 2);
    }
}
