use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::process;
use std::time::Duration;

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const WALKING_METERS_PER_MINUTE: f64 = 67.0;

// --- Response shapes ---

#[derive(Deserialize, Debug)]
struct Team {
    seniors: Vec<String>,
    juniors: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Place {
    name: String,
    distance_meters: u32,
    address: String,
    #[serde(default)]
    phone: Option<String>,
    external_url: String,
}

#[derive(Deserialize, Debug)]
struct LunchResponse {
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: String,
}

// --- Client ---

struct LunchClient {
    base_url: String,
    client: Client,
}

impl LunchClient {
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn fetch_team(&self) -> Result<Team> {
        let response = self
            .client
            .get(format!("{}/team", self.base_url))
            .send()
            .await
            .context("Team request failed")?;

        if !response.status().is_success() {
            bail!("HTTP {} from /team", response.status());
        }

        response.json::<Team>().await.context("Failed to parse team JSON")
    }

    async fn fetch_places(&self, category: &str) -> Result<Vec<Place>> {
        let response = self
            .client
            .get(format!("{}/lunch", self.base_url))
            .query(&[("category", category)])
            .send()
            .await
            .context("Lunch request failed")?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .json::<LunchResponse>()
                .await
                .context("Failed to parse lunch JSON")?;
            return Ok(body.results);
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| "Unknown error".to_string());
        bail!("HTTP {} - {}", status, message)
    }
}

fn print_team(team: &Team) {
    println!("\n{}👥 오늘의 멤버{}", BOLD, RESET);
    let members: Vec<&str> = team
        .seniors
        .iter()
        .chain(team.juniors.iter())
        .map(String::as_str)
        .collect();
    println!("  {}{}{}", GREEN, members.join("  ·  "), RESET);
}

fn print_places(places: &[Place]) {
    println!("\n{}🍽️  근처 맛집 추천 (1km 이내){}", BOLD, RESET);
    if places.is_empty() {
        println!("  {}추천할 장소가 없어요{}", YELLOW, RESET);
        return;
    }

    for place in places {
        let minutes = (place.distance_meters as f64 / WALKING_METERS_PER_MINUTE).round() as u32;
        println!("\n  {}{}{}", CYAN, place.name, RESET);
        println!("    🚶 도보 {}분 ({}m)", minutes, place.distance_meters);
        println!("    📍 {}", place.address);
        if let Some(phone) = &place.phone {
            println!("    📞 {}", phone);
        }
        println!("    🔗 {}", place.external_url);
    }
}

async fn run(client: &LunchClient, category: &str) -> Result<()> {
    let (team, places) = tokio::try_join!(client.fetch_team(), client.fetch_places(category))?;
    print_team(&team);
    print_places(&places);
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let base_url = env::var("LUNCH_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let category = env::args().nth(1).unwrap_or_else(|| "전체".to_string());

    let client = match LunchClient::new(base_url) {
        Ok(client) => client,
        Err(e) => {
            println!("{}❌ {:#}{}", RED, e, RESET);
            process::exit(1);
        }
    };

    if !client.check_service_health().await {
        println!("{}❌ Service unavailable.{}", RED, RESET);
        println!("{}Please ensure lunch-roulette is running (cargo run){}", YELLOW, RESET);
        process::exit(1);
    }

    println!("{}🎲 누가 나올까? [{}]{}", CYAN, category, RESET);

    if let Err(e) = run(&client, &category).await {
        println!("{}❌ {:#}{}", RED, e, RESET);
        process::exit(1);
    }
}
