use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::Range;

// Three groups each: opening tag, inner markup, closing boundary.
static GAMES_GRID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)(<div class="games-grid" id="gamesGrid">)(.*?)(</div>\s*<!--.*?Pagination.*?-->|</div>\s*</div>\s*</section>)"#,
    )
    .unwrap()
});
static VIDEOS_GRID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(<div class="videos-grid" id="videosGrid">)(.*?)(</div>\s*</div>\s*</section>)"#)
        .unwrap()
});
static DEVELOPER_GRID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(<div class="dev-grid">)(.*?)(</div>\s*</div>\s*</section>)"#).unwrap()
});
static DEVELOPER_PREVIEW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(<div class="dev-preview">)(.*?)(</div>\s*</div>\s*</section>)"#).unwrap()
});

// Homepage grids are closed by the `</div>` that balances their opening tag.
static LATEST_GAMES_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<div class="grid three"[^>]*id="latest-games"[^>]*>"#).unwrap());
static POPULAR_SHOWCASES_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<div class="grid three"[^>]*id="popular-showcases"[^>]*>"#).unwrap()
});
static DIV_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(/?)div\b[^>]*>").unwrap());

/// An editable region of a site page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    GamesGrid,
    VideosGrid,
    DeveloperGrid,
    LatestGames,
    PopularShowcases,
    DeveloperPreview,
}

enum Boundary {
    Pattern(&'static Lazy<Regex>),
    Balanced(&'static Lazy<Regex>),
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::GamesGrid => "games-grid",
            Section::VideosGrid => "videos-grid",
            Section::DeveloperGrid => "dev-grid",
            Section::LatestGames => "latest-games",
            Section::PopularShowcases => "popular-showcases",
            Section::DeveloperPreview => "dev-preview",
        }
    }

    fn boundary(&self) -> Boundary {
        match self {
            Section::GamesGrid => Boundary::Pattern(&GAMES_GRID),
            Section::VideosGrid => Boundary::Pattern(&VIDEOS_GRID),
            Section::DeveloperGrid => Boundary::Pattern(&DEVELOPER_GRID),
            Section::DeveloperPreview => Boundary::Pattern(&DEVELOPER_PREVIEW),
            Section::LatestGames => Boundary::Balanced(&LATEST_GAMES_OPEN),
            Section::PopularShowcases => Boundary::Balanced(&POPULAR_SHOWCASES_OPEN),
        }
    }

    /// Indentation written between a fresh fragment and the closing boundary.
    pub(crate) fn tail(&self) -> &'static str {
        match self {
            Section::GamesGrid => "\n\n      ",
            _ => "\n      ",
        }
    }

    /// Byte range of the markup between the opening tag and the closing
    /// boundary, or `None` when either cannot be found.
    pub fn locate(&self, html: &str) -> Option<Range<usize>> {
        match self.boundary() {
            Boundary::Pattern(pattern) => {
                let caps = pattern.captures(html)?;
                caps.get(2).map(|inner| inner.range())
            }
            Boundary::Balanced(opening) => locate_balanced(opening, html),
        }
    }

    pub fn inner<'a>(&self, html: &'a str) -> Option<&'a str> {
        self.locate(html).map(|range| &html[range])
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn locate_balanced(opening: &Regex, html: &str) -> Option<Range<usize>> {
    let open = opening.find(html)?;
    let rest = &html[open.end()..];
    let mut depth = 1usize;

    for tag in DIV_TAG.captures_iter(rest) {
        let whole = tag.get(0)?;
        if tag[1].is_empty() {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Some(open.end()..open.end() + whole.start());
            }
        }
    }

    None
}
