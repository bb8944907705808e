//! The demo catalog and the two built-in showcases.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::record::{DemoRecord, Destination, ShowcaseLabel};

const PERSONA_URL: &str = "https://anam-demo-version-001.vercel.app/";
const IMAGE_URL: &str = "https://acolyte-image-demo.vercel.app/";
const VIDEO_URL: &str = "https://acolyte-veo-v3-demo.vercel.app/";

/// An ordered, validated list of demo records.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<DemoRecord>,
}

impl Catalog {
    /// Validates `records` and wraps them.
    ///
    /// Rejects an empty list, duplicate ids, records without categories and
    /// records that repeat a category tag.
    pub fn new(records: Vec<DemoRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::with_capacity(records.len());
        for record in &records {
            if !ids.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
            if record.links.is_empty() {
                return Err(CatalogError::NoCategories(record.id.clone()));
            }
            let mut tags = HashSet::with_capacity(record.links.len());
            for tag in record.categories() {
                if !tags.insert(tag) {
                    return Err(CatalogError::DuplicateCategory {
                        demo: record.id.clone(),
                        tag: tag.to_string(),
                    });
                }
            }
        }

        Ok(Self { records })
    }

    /// Number of demos.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&DemoRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns whether a record with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &DemoRecord> {
        self.records.iter()
    }

    /// The showcase with one link per demo, a showcase badge, and progress
    /// tracking.
    pub fn progress_showcase() -> Result<Self, CatalogError> {
        Self::new(vec![
            DemoRecord::new(
                "realtime-persona",
                "Realtime Persona Logic",
                "Advanced conversational AI platform featuring intelligent avatars with natural language processing, emotional intelligence, and contextual memory for enterprise-grade customer interactions.",
            )
            .with_image("/pic-1.png")
            .with_link("Conversational AI", Destination::live(PERSONA_URL))
            .with_showcase(ShowcaseLabel::FeaturedTechnology)
            .with_features([
                "Real-time Processing",
                "Multi-language Support",
                "Emotion Recognition",
            ]),
            DemoRecord::new(
                "ai-image-generation",
                "AI Image Generation",
                "State-of-the-art generative AI for creating professional-grade visuals, marketing materials, and custom artwork with enterprise security and scalability.",
            )
            .with_image("/pic-2.jpg")
            .with_link("Computer Vision", Destination::live(IMAGE_URL))
            .with_showcase(ShowcaseLabel::NewIntegration)
            .with_features([
                "High Resolution Output",
                "Brand Consistency",
                "Batch Processing",
            ]),
            DemoRecord::new(
                "video-creation",
                "Video Creation Studio",
                "Professional video synthesis platform leveraging cutting-edge AI for automated content creation, training materials, and marketing campaigns.",
            )
            .with_image("/video-1.mp4")
            .with_link("Media Generation", Destination::live(VIDEO_URL))
            .with_showcase(ShowcaseLabel::TrendingSolution)
            .with_features(["4K Output", "Custom Branding", "API Integration"]),
        ])
    }

    /// The showcase where each card offers several categories, some of
    /// which are not live yet.
    pub fn category_showcase() -> Result<Self, CatalogError> {
        Self::new(vec![
            DemoRecord::new(
                "realtime-persona",
                "Realtime Persona Logic",
                "Conversational avatars with natural language processing and contextual memory, tuned per audience.",
            )
            .with_image("/pic-1.png")
            .with_link("Patient Intake", Destination::live(PERSONA_URL))
            .with_link("Sales Training", Destination::ComingSoon)
            .with_link("Customer Support", Destination::ComingSoon)
            .with_features([
                "Real-time Processing",
                "Multi-language Support",
                "Emotion Recognition",
            ]),
            DemoRecord::new(
                "ai-image-generation",
                "AI Image Generation",
                "Generative visuals for marketing materials and custom artwork with brand consistency.",
            )
            .with_image("/pic-2.jpg")
            .with_link("Marketing", Destination::live(IMAGE_URL))
            .with_link("Product Design", Destination::ComingSoon)
            .with_features([
                "High Resolution Output",
                "Brand Consistency",
                "Batch Processing",
            ]),
            DemoRecord::new(
                "video-creation",
                "Video Creation Studio",
                "Automated video synthesis for training materials and campaigns.",
            )
            .with_image("/video-1.mp4")
            .with_link("Training", Destination::live(VIDEO_URL))
            .with_link("Marketing", Destination::ComingSoon)
            .with_features(["4K Output", "Custom Branding", "API Integration"]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> DemoRecord {
        DemoRecord::new(id, id, "").with_link("General", Destination::ComingSoon)
    }

    #[test]
    fn test_builtin_catalogs_are_valid() {
        assert!(Catalog::progress_showcase().is_ok());
        assert!(Catalog::category_showcase().is_ok());
    }

    #[test]
    fn test_category_showcase_has_choices() {
        let catalog = Catalog::category_showcase().unwrap();
        assert!(catalog.iter().all(|r| r.links.len() > 1));
        assert!(
            catalog
                .iter()
                .all(|r| !r.links[0].destination.is_coming_soon())
        );
    }

    #[test]
    fn test_progress_showcase_has_one_link_per_demo() {
        let catalog = Catalog::progress_showcase().unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|r| r.links.len() == 1 && r.showcase.is_some()));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let result = Catalog::new(vec![record("a"), record("b"), record("a")]);
        assert_eq!(result, Err(CatalogError::DuplicateId("a".into())));
    }

    #[test]
    fn test_rejects_missing_categories() {
        let result = Catalog::new(vec![DemoRecord::new("bare", "Bare", "")]);
        assert_eq!(result, Err(CatalogError::NoCategories("bare".into())));
    }

    #[test]
    fn test_rejects_repeated_category() {
        let dup = record("a").with_link("General", Destination::live("https://example.com"));
        assert!(matches!(
            Catalog::new(vec![dup]),
            Err(CatalogError::DuplicateCategory { .. })
        ));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![record("a"), record("b")]).unwrap();
        assert!(catalog.contains("b"));
        assert!(!catalog.contains("c"));
        assert_eq!(catalog.get("a").map(|r| r.title.as_str()), Some("a"));
        let ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
