use super::SectionScraper;
use crate::domain::Video;
use crate::engine::sections::Section;
use crate::services::text_utils::{extract_video_id, format_date_display, parse_view_count};
use once_cell::sync::Lazy;
use regex::Regex;

pub struct VideosScraper;

static VIDEO_CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?s)<div class="video-card[^>]*data-date="([^"]*)"[^>]*onclick="openVideo\('([^']*)'[^>]*>"#,
        r#".*?<img src="([^"]*)"[^>]*alt="([^"]*)"[^>]*class="video-thumbnail">"#,
        r#".*?<div class="video-duration">([^<]*)</div>"#,
        r#".*?<h3 class="video-title">([^<]*)</h3>"#,
        r#".*?<p class="video-description">([^<]*)</p>"#,
        r#".*?<div class="video-views">([^<]*)</div>"#,
        r#".*?<div class="video-channel">([^<]*)</div>"#,
    ))
    .unwrap()
});

impl SectionScraper for VideosScraper {
    type Output = Vec<Video>;

    fn section(&self) -> Section {
        Section::VideosGrid
    }

    fn scrape(&self, container: &str) -> Vec<Video> {
        VIDEO_CARD
            .captures_iter(container)
            .map(|caps| {
                let published_at = caps[1].to_string();
                let url = caps[2].trim().to_string();
                let views = caps[8].trim().to_string();

                Video {
                    id: extract_video_id(&url).unwrap_or_default(),
                    title: caps[6].trim().to_string(),
                    description: caps[7].trim().to_string(),
                    thumbnail: caps[3].trim().to_string(),
                    date_display: format_date_display(&published_at),
                    published_at,
                    duration: caps[5].trim().to_string(),
                    view_count: parse_view_count(&views),
                    views,
                    channel: caps[9].trim().to_string(),
                    url,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::splice::splice_section;
    use crate::engine::templates::videos_listing;

    const SHOWCASES_PAGE: &str = r#"<section class="showcases">
    <div class="container">
      <div class="videos-grid" id="videosGrid">
      </div>
    </div>
  </section>"#;

    fn clip(id: &str, views: &str) -> Video {
        let url = format!("https://www.youtube.com/watch?v={}", id);
        Video {
            id: id.to_string(),
            title: format!("Showcase {}", id),
            description: "Gameplay demonstration.".into(),
            thumbnail: format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id),
            url,
            published_at: "2024-03-05T10:00:00Z".into(),
            duration: "4:20".into(),
            views: views.to_string(),
            view_count: parse_view_count(views),
            channel: "Studio".into(),
            date_display: "Mar 5, 2024".into(),
        }
    }

    #[test]
    fn round_trips_through_listing() {
        let videos = vec![clip("abc123", "1.2K views"), clip("xyz-9", "3M views")];
        let page = splice_section(
            SHOWCASES_PAGE,
            Section::VideosGrid,
            Some("Videos managed by admin panel"),
            &videos_listing(&videos),
        );
        assert!(page.anchored);

        let scraped = VideosScraper.extract(&page.document);
        assert_eq!(scraped, videos);
        assert_eq!(scraped[0].view_count, 1200);
        assert_eq!(scraped[1].view_count, 3_000_000);
    }

    #[test]
    fn unknown_url_leaves_id_empty() {
        let mut video = clip("abc123", "45 views");
        video.url = "https://example.com/clip".into();
        video.id = String::new();
        let page = splice_section(SHOWCASES_PAGE, Section::VideosGrid, None, &videos_listing([&video]));

        let scraped = VideosScraper.extract(&page.document);
        assert_eq!(scraped.len(), 1);
        assert_eq!(scraped[0].id, "");
        assert_eq!(scraped[0].view_count, 45);
    }

    #[test]
    fn empty_grid_is_not_an_error() {
        assert!(VideosScraper.extract(SHOWCASES_PAGE).is_empty());
    }
}
