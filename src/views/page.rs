// src/views/page.rs
// DOCUMENTATION: HTML rendering for the lunch page
// PURPOSE: Build the page shell and the team / places cards swapped in by app.js

use crate::models::{CategorySelector, Place, Team};

/// Escape text for HTML bodies and quoted attributes
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full page; results stay hidden until the first pick
pub fn render_page() -> String {
    let categories: String = CategorySelector::ALL_OPTIONS
        .iter()
        .map(|option| {
            let active = if *option == CategorySelector::default() {
                " active"
            } else {
                ""
            };
            format!(
                r#"<button type="button" class="category{active}" data-category="{label}">{label}</button>"#,
                label = option.label(),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Who Are You?</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main class="sheet">
    <header class="intro">
        <div id="logo" class="logo" title="처음으로">Who Are You?</div>
        <p class="greeting">오늘은 누구랑 점심 먹을까요? <br>점심시간에 새로운 조합, 새로운 수다! <br>팀 랜덤 돌렸습니다~ 😎</p>
        <div id="categories" class="categories">{categories}</div>
        <button type="button" id="pick" class="pick">누가 나올까?</button>
    </header>
    <section id="results" class="results" hidden>
        <div id="team-slot"></div>
        <div id="places-slot"></div>
    </section>
</main>
<script src="/static/app.js"></script>
</body>
</html>"#
    )
}

/// Render the "오늘의 멤버" card
pub fn render_team_card(team: &Team) -> String {
    let members: String = team
        .members()
        .map(|name| format!(r#"<span class="member">{}</span>"#, html_escape(name)))
        .collect();

    format!(
        r#"<div class="card">
    <div class="card-head">
        <span class="card-title">오늘의 멤버</span>
        <button type="button" class="refresh" data-action="team">새로운 멤버</button>
    </div>
    <div class="members">{members}</div>
</div>"#
    )
}

/// Render the places card; nothing at all when there is nothing to suggest
pub fn render_places_card(places: &[Place]) -> String {
    if places.is_empty() {
        return String::new();
    }

    let items: String = places.iter().map(render_place).collect();

    format!(
        r#"<div class="card">
    <div class="card-head">
        <span class="card-title">근처 맛집 추천 <small>1km 이내</small></span>
        <button type="button" class="refresh" data-action="places">새로운 장소</button>
    </div>
    <div class="places">{items}</div>
</div>"#
    )
}

/// Shown in place of the places card when the provider call failed
pub fn render_places_unavailable() -> String {
    r#"<div class="card notice">
    <div class="card-head">
        <span class="card-title">장소를 불러오지 못했어요</span>
        <button type="button" class="refresh" data-action="places">다시 시도</button>
    </div>
</div>"#
        .to_string()
}

fn render_place(place: &Place) -> String {
    let phone = match &place.phone {
        Some(phone) => format!("<p>📞 {}</p>", html_escape(phone)),
        None => String::new(),
    };

    format!(
        r#"<div class="place">
    <h3>{name}</h3>
    <div class="place-meta">
        <p>🚶 도보 {minutes}분 ({distance}m)</p>
        <p>📍 {address}</p>
        {phone}
    </div>
    <a class="map-link" href="{url}" target="_blank" rel="noopener noreferrer">카카오 맵에서 보기</a>
</div>"#,
        name = html_escape(&place.name),
        minutes = place.walking_minutes(),
        distance = place.distance_meters,
        address = html_escape(&place.address),
        url = html_escape(&place.external_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, distance_meters: u32, phone: Option<&str>) -> Place {
        Place {
            name: name.to_string(),
            distance_meters,
            address: "서울 강서구 마곡동 1".to_string(),
            phone: phone.map(str::to_string),
            external_url: "http://place.map.kakao.com/9".to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_page_has_controls_and_default_category() {
        let html = render_page();
        assert!(html.contains(r#"id="pick""#));
        assert!(html.contains(r#"class="category active" data-category="전체""#));
        assert!(html.contains(r#"data-category="식당""#));
        assert!(html.contains(r#"data-category="카페""#));
        assert!(html.contains(r#"id="results" class="results" hidden"#));
    }

    #[test]
    fn test_team_card_lists_seniors_then_juniors() {
        let team = Team {
            seniors: vec!["김과장".to_string(), "이부장".to_string()],
            juniors: vec!["민영".to_string(), "<b>태호</b>".to_string()],
        };
        let html = render_team_card(&team);

        let first = html.find("김과장").unwrap();
        let junior = html.find("민영").unwrap();
        assert!(first < junior);
        assert!(html.contains("&lt;b&gt;태호&lt;/b&gt;"));
        assert!(html.contains(r#"data-action="team""#));
    }

    #[test]
    fn test_places_card_shows_walking_time_and_optional_phone() {
        let html = render_places_card(&[
            place("국밥집", 670, Some("02-111-2222")),
            place("카페", 134, None),
        ]);

        assert!(html.contains("도보 10분 (670m)"));
        assert!(html.contains("도보 2분 (134m)"));
        assert_eq!(html.matches("📞").count(), 1);
        assert!(html.contains(r#"href="http://place.map.kakao.com/9""#));
        assert!(html.contains(r#"data-action="places""#));
    }

    #[test]
    fn test_empty_places_render_nothing() {
        assert!(render_places_card(&[]).is_empty());
    }
}
