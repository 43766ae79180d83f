// src/views/assets.rs
// DOCUMENTATION: Embedded static assets
// PURPOSE: Page script and stylesheet served from /static

/// Page script. UI state (category, cards, started flag) lives only in the DOM.
pub const APP_JS: &str = r#"(function () {
  const state = { category: "전체", started: false };
  const results = document.getElementById("results");
  const teamSlot = document.getElementById("team-slot");
  const placesSlot = document.getElementById("places-slot");

  // Last response to arrive wins; in-flight requests are never cancelled.
  async function load(url, slot) {
    try {
      const res = await fetch(url);
      slot.innerHTML = res.ok ? await res.text() : "";
    } catch (err) {
      console.error("fragment request failed", url, err);
      slot.innerHTML = "";
    }
  }

  const refreshTeam = () => load("/fragments/team", teamSlot);
  const refreshPlaces = () =>
    load("/fragments/places?category=" + encodeURIComponent(state.category), placesSlot);

  document.getElementById("categories").addEventListener("click", (e) => {
    const button = e.target.closest("[data-category]");
    if (!button) return;
    state.category = button.dataset.category;
    document.querySelectorAll("[data-category]").forEach((b) => {
      b.classList.toggle("active", b === button);
    });
  });

  document.getElementById("pick").addEventListener("click", () => {
    refreshTeam();
    refreshPlaces();
    if (!state.started) {
      state.started = true;
      results.hidden = false;
      results.classList.add("enter");
    }
  });

  results.addEventListener("click", (e) => {
    const button = e.target.closest("[data-action]");
    if (!button) return;
    if (button.dataset.action === "team") refreshTeam();
    if (button.dataset.action === "places") refreshPlaces();
  });

  document.getElementById("logo").addEventListener("click", () => window.location.reload());
})();
"#;

pub const STYLE_CSS: &str = r#"* { box-sizing: border-box; }
body { margin: 0; background: #f9fafb; font-family: -apple-system, "Apple SD Gothic Neo", "Noto Sans KR", sans-serif; color: #1f2937; overflow-y: scroll; }
.sheet { width: 750px; max-width: 100%; min-height: 100vh; margin: 0 auto; background: #fff; padding: 40px 24px; display: flex; flex-direction: column; justify-content: center; }
.intro { display: flex; flex-direction: column; align-items: center; animation: rise 1.2s ease-in-out; }
.logo { margin-bottom: 20px; cursor: pointer; font-size: 28px; font-weight: 800; color: #f97316; }
.greeting { text-align: center; color: #4b5563; line-height: 1.6; margin-bottom: 24px; }
.categories { display: flex; gap: 8px; width: 280px; margin-bottom: 20px; }
.category { flex: 1; padding: 8px 0; border-radius: 12px; border: 1px solid #d1d5db; background: #fff; color: #4b5563; font-weight: 600; font-size: 16px; cursor: pointer; }
.category:hover { border-color: #9ca3af; }
.category.active { background: #fff7ed; color: #f97316; border-color: #fb923c; }
.pick { width: 288px; padding: 12px 0; margin-bottom: 32px; border: 0; border-radius: 12px; background: #f97316; color: #fff; font-weight: 700; font-size: 18px; cursor: pointer; }
.pick:hover { background: #ea580c; }
.results { width: 100%; max-width: 448px; margin: 32px auto 0; }
.results.enter { animation: rise 0.8s ease-in-out 1s both; }
.card { border: 1px solid #e5e7eb; border-radius: 12px; padding: 24px; margin-bottom: 24px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.card.notice { color: #6b7280; }
.card-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }
.card-title { font-weight: 600; font-size: 18px; }
.card-title small { margin-left: 4px; color: #9ca3af; font-weight: 400; font-size: 14px; }
.refresh { border: 0; background: none; color: #f97316; font-size: 14px; cursor: pointer; }
.refresh:hover { text-decoration: underline; }
.members { background: #f9fafb; border-radius: 8px; padding: 16px; display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; }
.member { background: #fff; padding: 8px 16px; border-radius: 9999px; font-weight: 500; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.place { border: 1px solid #f3f4f6; border-radius: 12px; padding: 20px 16px; margin-bottom: 16px; }
.place h3 { margin: 0 0 8px; font-size: 16px; font-weight: 600; }
.place-meta p { margin: 4px 0; font-size: 14px; color: #4b5563; }
.map-link { display: block; margin-top: 16px; padding: 8px 0; text-align: center; border-radius: 8px; background: #fff7ed; color: #f97316; font-weight: 600; font-size: 14px; text-decoration: none; }
.map-link:hover { background: #ffedd5; }
@keyframes rise { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
"#;
