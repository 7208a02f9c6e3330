use super::SectionScraper;
use crate::domain::{Developer, DeveloperMap};
use crate::engine::sections::Section;
use crate::services::text_utils::TitleNormalizer;
use once_cell::sync::Lazy;
use regex::Regex;

pub struct DevelopersScraper;

static DEV_CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?s)<div class="dev-card[^>]*>"#,
        r#".*?<img src="([^"]+)"[^>]*alt="([^"]+)"[^>]*>"#,
        r#".*?<h3 class="dev-name">([^<]+)</h3>"#,
        r#".*?<div class="dev-role">([^<]+)</div>"#,
        r#".*?<p class="dev-description">\s*(.*?)\s*</p>"#,
        r#".*?<div class="skill-tags">(.*?)</div>"#,
    ))
    .unwrap()
});
static SKILL_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<span class="skill-tag">([^<]+)</span>"#).unwrap());

impl SectionScraper for DevelopersScraper {
    type Output = DeveloperMap;

    fn section(&self) -> Section {
        Section::DeveloperGrid
    }

    fn scrape(&self, container: &str) -> DeveloperMap {
        let mut developers = DeveloperMap::new();

        for caps in DEV_CARD.captures_iter(container) {
            let name = caps[3].trim().to_string();
            let skills = SKILL_TAG
                .captures_iter(&caps[6])
                .map(|skill| skill[1].trim().to_string())
                .collect();

            developers.insert(
                TitleNormalizer::developer_key(&name),
                Developer {
                    role: caps[4].trim().to_string(),
                    avatar: caps[1].trim().to_string(),
                    description: TitleNormalizer::collapse_whitespace(&caps[5]),
                    skills,
                    name,
                },
            );
        }

        developers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::splice::splice_section;
    use crate::engine::templates::developers_listing;

    const TEAM_PAGE: &str = r#"<section class="team">
    <div class="container">
      <div class="dev-grid">
        <div class="dev-card scroll-reveal">
          <div class="dev-avatar">
            <img src="/avatars/loaf.png" alt="@Loaf Master">
          </div>
          <h3 class="dev-name">@Loaf Master</h3>
          <div class="dev-role">Lead Developer</div>
          <p class="dev-description">
            Writes most of the
            core scripts.
          </p>
          <div class="skill-tags">
            <span class="skill-tag">Lua</span>
            <span class="skill-tag">Reverse Engineering</span>
          </div>
        </div>
      </div>
    </div>
  </section>"#;

    #[test]
    fn reads_hand_written_card() {
        let developers = DevelopersScraper.extract(TEAM_PAGE);
        let loaf = &developers["loaf-master"];
        assert_eq!(loaf.name, "@Loaf Master");
        assert_eq!(loaf.role, "Lead Developer");
        assert_eq!(loaf.avatar, "/avatars/loaf.png");
        assert_eq!(loaf.description, "Writes most of the core scripts.");
        assert_eq!(loaf.skills, ["Lua", "Reverse Engineering"]);
    }

    #[test]
    fn round_trips_through_listing() {
        let mut developers = DeveloperMap::new();
        developers.insert(
            "ace".to_string(),
            Developer {
                name: "Ace".into(),
                role: "UI".into(),
                avatar: "/avatars/ace.png".into(),
                description: "Builds the menus.".into(),
                skills: vec!["Design".into()],
            },
        );
        developers.insert(
            "night-owl".to_string(),
            Developer {
                name: "Night Owl".into(),
                role: "Tester".into(),
                avatar: "/avatars/owl.png".into(),
                description: "Finds the bugs.".into(),
                skills: vec!["QA".into(), "Lua".into()],
            },
        );

        let page = splice_section(
            TEAM_PAGE,
            Section::DeveloperGrid,
            None,
            &developers_listing(&developers),
        );
        assert!(page.anchored);
        assert_eq!(DevelopersScraper.extract(&page.document), developers);
    }
}
