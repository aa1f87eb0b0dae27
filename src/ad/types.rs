//! Core types describing an ad generation request.

use crate::error::{AdGenError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Marketing-visual archetype selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdStyle {
    /// Clean marketplace product photography.
    #[serde(rename = "Ecommerce Product Shot")]
    Ecommerce,
    /// Scroll-stopping social feed creative.
    #[default]
    #[serde(rename = "Social Media Placement")]
    SocialMedia,
    /// Authentic customer-captured look.
    #[serde(rename = "User Generated Content (UGC)")]
    Ugc,
    /// Imagery accompanying customer reviews.
    #[serde(rename = "Testimonial / Reviews")]
    Testimonial,
    /// Visualizes the outcome the product delivers.
    #[serde(rename = "Benefit Oriented")]
    Benefit,
    /// Product placed in everyday life.
    #[serde(rename = "Lifestyle")]
    Lifestyle,
    /// High-end commercial studio lighting.
    #[serde(rename = "Professional Studio")]
    Studio,
    /// Curated flat-lay and mood-board aesthetics.
    #[serde(rename = "Pinterest Aesthetic")]
    Pinterest,
    /// Luxury campaign implying a celebrity endorsement.
    #[serde(rename = "Celebrity Endorsement")]
    Celebrity,
    /// Unedited smartphone capture.
    #[serde(rename = "iPhone Realistic")]
    Iphone,
    /// Split-screen transformation.
    #[serde(rename = "Before & After")]
    BeforeAfter,
    /// Calm, monochromatic luxury.
    #[serde(rename = "Minimalist Luxury")]
    Minimalist,
    /// Neon-lit futuristic render.
    #[serde(rename = "Neon / Cyberpunk")]
    NeonCyberpunk,
}

impl AdStyle {
    /// Every style, in catalog order.
    pub const ALL: [AdStyle; 13] = [
        Self::Ecommerce,
        Self::SocialMedia,
        Self::Ugc,
        Self::Testimonial,
        Self::Benefit,
        Self::Lifestyle,
        Self::Studio,
        Self::Pinterest,
        Self::Celebrity,
        Self::Iphone,
        Self::BeforeAfter,
        Self::Minimalist,
        Self::NeonCyberpunk,
    ];

    /// Returns the human-readable name (also the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecommerce => "Ecommerce Product Shot",
            Self::SocialMedia => "Social Media Placement",
            Self::Ugc => "User Generated Content (UGC)",
            Self::Testimonial => "Testimonial / Reviews",
            Self::Benefit => "Benefit Oriented",
            Self::Lifestyle => "Lifestyle",
            Self::Studio => "Professional Studio",
            Self::Pinterest => "Pinterest Aesthetic",
            Self::Celebrity => "Celebrity Endorsement",
            Self::Iphone => "iPhone Realistic",
            Self::BeforeAfter => "Before & After",
            Self::Minimalist => "Minimalist Luxury",
            Self::NeonCyberpunk => "Neon / Cyberpunk",
        }
    }

    /// Returns the short identifier used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::SocialMedia => "social-media",
            Self::Ugc => "ugc",
            Self::Testimonial => "testimonial",
            Self::Benefit => "benefit",
            Self::Lifestyle => "lifestyle",
            Self::Studio => "studio",
            Self::Pinterest => "pinterest",
            Self::Celebrity => "celebrity",
            Self::Iphone => "iphone",
            Self::BeforeAfter => "before-after",
            Self::Minimalist => "minimalist",
            Self::NeonCyberpunk => "neon-cyberpunk",
        }
    }

    /// Position of this style in [`AdStyle::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Optional fields this style's prompts make use of.
    pub fn accepted_fields(&self) -> &'static [AdField] {
        match self {
            Self::Ecommerce => &[AdField::Price, AdField::OfferDetails, AdField::CustomContext],
            Self::Benefit => &[AdField::BenefitText, AdField::CustomContext],
            Self::Celebrity => &[AdField::CelebrityName, AdField::CustomContext],
            _ => &[AdField::CustomContext],
        }
    }
}

impl std::fmt::Display for AdStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdStyle {
    type Err = AdGenError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().to_lowercase() == wanted || style.slug() == wanted)
            .ok_or_else(|| AdGenError::InvalidRequest(format!("unknown ad style: {s}")))
    }
}

/// Optional free-text fields of an [`AdConfiguration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdField {
    /// Price shown on a price tag.
    Price,
    /// Offer text ("20% off").
    OfferDetails,
    /// Main benefit to visualize.
    BenefitText,
    /// Celebrity whose style is implied.
    CelebrityName,
    /// Free-text request appended to every prompt.
    CustomContext,
}

impl AdField {
    /// Returns the field's display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::OfferDetails => "offer details",
            Self::BenefitText => "main benefit",
            Self::CelebrityName => "celebrity name",
            Self::CustomContext => "additional context",
        }
    }
}

/// Output aspect ratios supported by the image service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1:1 square aspect ratio.
    #[default]
    #[serde(rename = "1:1")]
    Square,
    /// 9:16 portrait (stories, reels).
    #[serde(rename = "9:16")]
    Portrait,
    /// 16:9 landscape (widescreen).
    #[serde(rename = "16:9")]
    Landscape,
    /// 4:3 classic landscape.
    #[serde(rename = "4:3")]
    Standard,
    /// 3:4 classic portrait.
    #[serde(rename = "3:4")]
    StandardPortrait,
}

impl AspectRatio {
    /// Every supported ratio.
    pub const ALL: [AspectRatio; 5] = [
        Self::Square,
        Self::Portrait,
        Self::Landscape,
        Self::Standard,
        Self::StandardPortrait,
    ];

    /// Returns the aspect ratio as a string (e.g., "16:9").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait => "9:16",
            Self::Landscape => "16:9",
            Self::Standard => "4:3",
            Self::StandardPortrait => "3:4",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = AdGenError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == wanted)
            .ok_or_else(|| AdGenError::InvalidRequest(format!("unsupported aspect ratio: {s}")))
    }
}

/// Output resolution hint understood by the premium model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    /// Roughly 1024px on the long edge.
    #[serde(rename = "1K")]
    OneK,
}

impl ImageSize {
    /// Returns the API value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneK => "1K",
        }
    }
}

/// Backend model variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelType {
    /// Gemini 2.5 Flash Image (fast, free tier).
    #[default]
    #[serde(rename = "gemini-2.5-flash-image")]
    Flash,
    /// Gemini 3 Pro Image (premium, needs a selected paid key).
    #[serde(rename = "gemini-3-pro-image-preview")]
    Pro,
}

impl ModelType {
    /// Returns the API model identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flash => "gemini-2.5-flash-image",
            Self::Pro => "gemini-3-pro-image-preview",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Flash => "Gemini 2.5 Flash",
            Self::Pro => "Gemini 3 Pro",
        }
    }

    /// Returns true for the variant that requires a selected paid credential.
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Pro)
    }

    /// Resolution hint sent with every request for this model.
    pub fn image_size(&self) -> Option<ImageSize> {
        match self {
            Self::Pro => Some(ImageSize::OneK),
            Self::Flash => None,
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three independent attempts made per generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variation {
    /// Index 0.
    First,
    /// Index 1.
    Second,
    /// Index 2.
    Third,
}

impl Variation {
    /// All variations in request order.
    pub const ALL: [Variation; 3] = [Self::First, Self::Second, Self::Third];

    /// Zero-based index.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// One-based number, as shown to users.
    pub fn number(&self) -> usize {
        self.index() + 1
    }
}

impl TryFrom<usize> for Variation {
    type Error = AdGenError;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| AdGenError::InvalidRequest(format!("variation index out of range: {index}")))
    }
}

impl std::fmt::Display for Variation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The user's current generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdConfiguration {
    /// Selected style.
    pub style: AdStyle,
    /// Output aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Backend model.
    pub model: ModelType,
    /// Style reference image as a data URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_image: Option<String>,
    /// Price shown on a price tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Offer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_details: Option<String>,
    /// Main benefit to visualize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_text: Option<String>,
    /// Celebrity whose style is implied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebrity_name: Option<String>,
    /// Free-text request appended to every prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_context: Option<String>,
}

/// Blank values count as unset; anything else is returned exactly as given.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl AdConfiguration {
    /// Creates a configuration with the session defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style.
    pub fn with_style(mut self, style: AdStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the aspect ratio.
    pub fn with_aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Sets the model.
    pub fn with_model(mut self, model: ModelType) -> Self {
        self.model = model;
        self
    }

    /// Sets the style reference image (data URL).
    pub fn with_reference_image(mut self, data_url: impl Into<String>) -> Self {
        self.reference_image = Some(data_url.into());
        self
    }

    /// Sets the price shown on the price tag.
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Sets the offer text.
    pub fn with_offer_details(mut self, offer: impl Into<String>) -> Self {
        self.offer_details = Some(offer.into());
        self
    }

    /// Sets the main benefit.
    pub fn with_benefit_text(mut self, benefit: impl Into<String>) -> Self {
        self.benefit_text = Some(benefit.into());
        self
    }

    /// Sets the celebrity name.
    pub fn with_celebrity_name(mut self, name: impl Into<String>) -> Self {
        self.celebrity_name = Some(name.into());
        self
    }

    /// Sets the free-text context.
    pub fn with_custom_context(mut self, context: impl Into<String>) -> Self {
        self.custom_context = Some(context.into());
        self
    }

    /// Returns true if a non-blank reference image is set.
    pub fn has_reference_image(&self) -> bool {
        present(&self.reference_image).is_some()
    }

    /// Returns the reference image data URL, if set.
    pub fn reference_image(&self) -> Option<&str> {
        present(&self.reference_image)
    }

    /// Returns the price, if set and non-blank.
    pub fn price(&self) -> Option<&str> {
        present(&self.price)
    }

    /// Returns the offer text, if set and non-blank.
    pub fn offer_details(&self) -> Option<&str> {
        present(&self.offer_details)
    }

    /// Returns the main benefit, if set and non-blank.
    pub fn benefit_text(&self) -> Option<&str> {
        present(&self.benefit_text)
    }

    /// Returns the celebrity name, if set and non-blank.
    pub fn celebrity_name(&self) -> Option<&str> {
        present(&self.celebrity_name)
    }

    /// Returns the free-text context, if set and non-blank.
    pub fn custom_context(&self) -> Option<&str> {
        present(&self.custom_context)
    }

    /// Returns the value of an optional field, if set.
    pub fn field(&self, field: AdField) -> Option<&str> {
        match field {
            AdField::Price => self.price(),
            AdField::OfferDetails => self.offer_details(),
            AdField::BenefitText => self.benefit_text(),
            AdField::CelebrityName => self.celebrity_name(),
            AdField::CustomContext => self.custom_context(),
        }
    }

    /// Optional fields that are set but not used by the selected style.
    pub fn ignored_fields(&self) -> Vec<AdField> {
        let accepted = self.style.accepted_fields();
        [
            AdField::Price,
            AdField::OfferDetails,
            AdField::BenefitText,
            AdField::CelebrityName,
            AdField::CustomContext,
        ]
        .into_iter()
        .filter(|field| self.field(*field).is_some() && !accepted.contains(field))
        .collect()
    }
}
