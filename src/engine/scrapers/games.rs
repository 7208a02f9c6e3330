use super::SectionScraper;
use crate::domain::{Game, GameMap};
use crate::engine::sections::Section;
use once_cell::sync::Lazy;
use regex::Regex;

pub struct GamesScraper;

static GAME_CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?s)<div class="game-card[^>]*data-game-id="([^"]+)"[^>]*data-status="([^"]+)"[^>]*onclick="openGameModal\('([^']+)'\)"[^>]*>"#,
        r#".*?<img src="([^"]+)"[^>]*alt="([^"]+)"[^>]*class="game-thumbnail">"#,
        r#".*?<h3 class="game-name">([^<]+)</h3>"#,
        r#".*?<p class="game-description">([^<]+)</p>"#,
        r#".*?<span class="status-badge[^"]*">([^<]+)</span>"#,
        r#".*?<span class="game-id"># ([^<]+)</span>"#,
    ))
    .unwrap()
});

impl SectionScraper for GamesScraper {
    type Output = GameMap;

    fn section(&self) -> Section {
        Section::GamesGrid
    }

    fn scrape(&self, container: &str) -> GameMap {
        let mut games = GameMap::new();

        for caps in GAME_CARD.captures_iter(container) {
            let key = caps[1].trim().to_string();
            games.insert(
                key,
                Game {
                    name: caps[6].trim().to_string(),
                    thumbnail: caps[4].trim().to_string(),
                    description: caps[7].trim().to_string(),
                    status: caps[8].trim().into(),
                    game_id: caps[9].trim().to_string(),
                    // Cards do not render features.
                    features: Vec::new(),
                },
            );
        }

        games
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameStatus;
    use crate::engine::splice::splice_section;
    use crate::engine::templates::games_listing;

    const DEMO_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Games</title></head>
<body>
  <section class="games-section">
    <div class="container">
      <div class="games-grid" id="gamesGrid">
        <div class="game-card reveal delay-1" data-game-id="demo" data-status="working" onclick="openGameModal('demo')">
          <img src="/img/demo.png" alt="Demo" class="game-thumbnail">
          <div class="game-content">
            <h3 class="game-name">Demo</h3>
            <p class="game-description">A small demo game.</p>
            <div class="game-status">
              <span class="status-badge status-working">Working</span>
              <span class="game-id"># 1001</span>
            </div>
          </div>
        </div>
      </div>
    </div>
  </section>
  <footer>© Demo</footer>
</body>
</html>"#;

    #[test]
    fn extracts_demo_card() {
        let games = GamesScraper.extract(DEMO_PAGE);
        assert_eq!(games.len(), 1);
        let demo = &games["demo"];
        assert_eq!(demo.name, "Demo");
        assert_eq!(demo.status, GameStatus::Working);
        assert_eq!(demo.thumbnail, "/img/demo.png");
        assert_eq!(demo.description, "A small demo game.");
        assert_eq!(demo.game_id, "1001");
        assert!(demo.features.is_empty());
    }

    #[test]
    fn editing_status_rewrites_only_the_grid() {
        let mut games = GamesScraper.extract(DEMO_PAGE);
        games["demo"].status = GameStatus::Updating;

        let spliced = splice_section(DEMO_PAGE, Section::GamesGrid, None, &games_listing(&games));
        assert!(spliced.anchored);
        assert!(spliced
            .document
            .contains(r#"<span class="status-badge status-updating">Updating</span>"#));

        let grid_open = r#"<div class="games-grid" id="gamesGrid">"#;
        let head_end = DEMO_PAGE.find(grid_open).unwrap() + grid_open.len();
        assert_eq!(&spliced.document[..head_end], &DEMO_PAGE[..head_end]);
        assert!(spliced
            .document
            .ends_with("      </div>\n    </div>\n  </section>\n  <footer>© Demo</footer>\n</body>\n</html>"));

        let reread = GamesScraper.extract(&spliced.document);
        assert_eq!(reread["demo"].status, GameStatus::Updating);
    }

    #[test]
    fn round_trips_through_listing() {
        let mut games = GameMap::new();
        for (key, name, status) in [
            ("alpha", "Alpha", GameStatus::Working),
            ("beta", "Beta", GameStatus::Patched),
            ("gamma", "Gamma", GameStatus::Other("Beta Test".into())),
        ] {
            games.insert(
                key.to_string(),
                Game {
                    name: name.to_string(),
                    thumbnail: format!("/img/{}.png", key),
                    description: format!("About {}", name),
                    status,
                    game_id: format!("{}-id", key),
                    features: Vec::new(),
                },
            );
        }

        let page = splice_section(DEMO_PAGE, Section::GamesGrid, None, &games_listing(&games));
        assert_eq!(GamesScraper.extract(&page.document), games);
    }

    #[test]
    fn page_without_grid_yields_nothing() {
        assert!(GamesScraper.extract("<html><body></body></html>").is_empty());
        assert!(GamesScraper.extract("").is_empty());
    }
}
