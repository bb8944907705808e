//! Demo records and the small value types hanging off them.

/// Image shown when a record has no usable image reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Asset extension that switches a card from an image to a looping video.
pub const VIDEO_EXTENSION: &str = ".mp4";

/// Where a "View Demo" control leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A live external demo.
    Live(String),
    /// No live destination exists yet.
    ComingSoon,
}

impl Destination {
    /// Creates a live destination.
    pub fn live(url: impl Into<String>) -> Self {
        Destination::Live(url.into())
    }

    /// Returns the URL if the destination is live.
    pub fn url(&self) -> Option<&str> {
        match self {
            Destination::Live(url) => Some(url),
            Destination::ComingSoon => None,
        }
    }

    /// Returns whether this is the "coming soon" sentinel.
    pub fn is_coming_soon(&self) -> bool {
        matches!(self, Destination::ComingSoon)
    }
}

/// One selectable category of a demo and the destination it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub tag: String,
    pub destination: Destination,
}

/// Showcase label drawn as a colored badge on the card media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseLabel {
    FeaturedTechnology,
    NewIntegration,
    TrendingSolution,
    NewTechnology,
    /// Any other label; drawn in the neutral color.
    Other(String),
}

impl ShowcaseLabel {
    /// Labels listed in the page header legend.
    pub const LEGEND: [ShowcaseLabel; 3] = [
        ShowcaseLabel::FeaturedTechnology,
        ShowcaseLabel::NewIntegration,
        ShowcaseLabel::TrendingSolution,
    ];

    /// Returns the display name for the label.
    pub fn display_name(&self) -> &str {
        match self {
            ShowcaseLabel::FeaturedTechnology => "Featured Technology",
            ShowcaseLabel::NewIntegration => "New Integration",
            ShowcaseLabel::TrendingSolution => "Trending Solution",
            ShowcaseLabel::NewTechnology => "New Technology",
            ShowcaseLabel::Other(name) => name,
        }
    }
}

/// How a record's media should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Image { src: String },
    /// Muted, looping, autoplaying video.
    Video { src: String },
}

impl Media {
    /// Chooses image or video from the asset path.
    ///
    /// An empty path falls back to [`PLACEHOLDER_IMAGE`].
    pub fn for_path(path: &str) -> Self {
        if path.is_empty() {
            Media::placeholder()
        } else if path.ends_with(VIDEO_EXTENSION) {
            Media::Video {
                src: path.to_string(),
            }
        } else {
            Media::Image {
                src: path.to_string(),
            }
        }
    }

    /// The placeholder image.
    pub fn placeholder() -> Self {
        Media::Image {
            src: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Returns the asset path.
    pub fn src(&self) -> &str {
        match self {
            Media::Image { src } | Media::Video { src } => src,
        }
    }

    /// Returns whether this is a video.
    pub fn is_video(&self) -> bool {
        matches!(self, Media::Video { .. })
    }
}

/// A showcased demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Relative asset path for the card media.
    pub image: String,
    /// Category tags in display order, each with its destination.
    pub links: Vec<CategoryLink>,
    pub features: Vec<String>,
    pub showcase: Option<ShowcaseLabel>,
}

impl DemoRecord {
    /// Creates a record with no media, links or features.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image: String::new(),
            links: Vec::new(),
            features: Vec::new(),
            showcase: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Appends a category and where it leads.
    pub fn with_link(mut self, tag: impl Into<String>, destination: Destination) -> Self {
        self.links.push(CategoryLink {
            tag: tag.into(),
            destination,
        });
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_showcase(mut self, showcase: ShowcaseLabel) -> Self {
        self.showcase = Some(showcase);
        self
    }

    /// Returns the category tags in order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.tag.as_str())
    }

    /// Returns the default category.
    pub fn first_category(&self) -> Option<&str> {
        self.links.first().map(|link| link.tag.as_str())
    }

    /// Returns whether `tag` is one of this record's categories.
    pub fn has_category(&self, tag: &str) -> bool {
        self.links.iter().any(|link| link.tag == tag)
    }

    /// Looks up the destination for a category tag.
    pub fn destination_for(&self, tag: &str) -> Option<&Destination> {
        self.links
            .iter()
            .find(|link| link.tag == tag)
            .map(|link| &link.destination)
    }

    /// Returns how the record's media should be drawn.
    pub fn media(&self) -> Media {
        Media::for_path(&self.image)
    }
}
