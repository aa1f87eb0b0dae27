//! Prompt composition.
//!
//! Every variation gets one instruction string with a fixed layout: a role
//! line, the input images, the style's technical baseline, the variation
//! brief, the user's free-text context and the critical rules. When a
//! reference image is supplied the brief is replaced by a style-transfer task.

use crate::ad::catalog::{self, StyleEntry};
use crate::ad::types::{AdConfiguration, AdStyle, Variation};

const ROLE: &str = "ROLE: You are an award-winning Commercial Photographer and CGI Artist.";

const CRITICAL_RULES: &str = "1. REALISM: The product must look 100% photorealistic. Match \
shadows, reflections, and lighting to the scene.\n\
2. INTEGRITY: Do not warp the product logo or text. Keep the product form factor identical to \
the input.\n\
3. LIGHTING MATCH: Analyze the product's original lighting in the input image. If it's flat, \
add scene lights to match. If it's side-lit, match the scene shadows.";

/// Returns the style-transfer brief used instead of the style's own
/// variation when a reference image is present.
pub fn style_transfer_task(variation: Variation) -> &'static str {
    match variation {
        Variation::First => {
            "TASK: STRICT STYLE TRANSFER. Replicate the exact lighting, composition, and mood \
of the Reference Image provided. Do not deviate from the reference style."
        }
        Variation::Second => {
            "TASK: CREATIVE ADAPTATION. Use the Reference Image's color palette and lighting, \
but change the camera angle to a low, dramatic view to make the product look larger than life."
        }
        Variation::Third => {
            "TASK: DETAIL/CONTEXT SHOT. Use the Reference Image's aesthetic, but zoom in or \
place the product in a slightly different context within that same world."
        }
    }
}

/// Builds the final instruction for one variation of `style`.
pub fn compose(
    style: AdStyle,
    variation: Variation,
    config: &AdConfiguration,
    has_reference: bool,
) -> String {
    compose_entry(catalog::entry(style), variation, config, has_reference)
}

/// Builds the final instruction from a catalog entry.
///
/// Used directly for entries resolved through [`catalog::lookup`], which may
/// be the generic fallback.
pub fn compose_entry(
    entry: &StyleEntry,
    variation: Variation,
    config: &AdConfiguration,
    has_reference: bool,
) -> String {
    let brief = if has_reference {
        style_transfer_task(variation).to_string()
    } else {
        entry.variation_text(variation, config)
    };

    let mut inputs = String::from("Image 1: The Product (HERO).");
    if has_reference {
        inputs.push_str("\nImage 2: The Style Reference.");
    }

    let context = match config.custom_context() {
        Some(ctx) => format!("USER REQUEST: {ctx}"),
        None => "None.".to_string(),
    };

    format!(
        "{ROLE}\n\n\
[INPUTS]\n{inputs}\n\n\
[TECHNICAL CAMERA SPECS (BASELINE)]\n{spec}\n\n\
[DETAILED VISUAL BRIEF - VARIATION {n}]\n{brief}\n\n\
[ADDITIONAL USER CONTEXT]\n{context}\n\n\
[CRITICAL RULES]\n{CRITICAL_RULES}",
        spec = entry.technical_spec,
        n = variation.number(),
    )
}

/// Composes all three variation prompts for a configuration.
pub fn compose_all(config: &AdConfiguration) -> [String; 3] {
    let has_reference = config.has_reference_image();
    Variation::ALL.map(|v| compose(config.style, v, config, has_reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_prompt_has_spec_and_concept() {
        let config = AdConfiguration::new();
        for style in AdStyle::ALL {
            let entry = catalog::entry(style);
            for variation in Variation::ALL {
                let prompt = compose(style, variation, &config, false);
                assert!(prompt.contains(entry.technical_spec), "{style}");
                assert!(prompt.contains(&entry.variation_text(variation, &config)));
                assert!(prompt.contains(&format!(
                    "[DETAILED VISUAL BRIEF - VARIATION {}]",
                    variation.number()
                )));
            }
        }
    }

    #[test]
    fn test_ecommerce_price_tag() {
        let config = AdConfiguration::new()
            .with_style(AdStyle::Ecommerce)
            .with_price("29.99");
        let prompt = compose(AdStyle::Ecommerce, Variation::First, &config, false);
        assert!(prompt.contains("elegant price tag showing \"$29.99\""));
    }

    #[test]
    fn test_field_values_appear_verbatim() {
        let config = AdConfiguration::new()
            .with_price(" 29.99 ")
            .with_custom_context(" add a sunset ");
        let prompt = compose(AdStyle::Ecommerce, Variation::First, &config, false);
        assert!(prompt.contains("showing \"$ 29.99 \""));
        assert!(prompt.contains("USER REQUEST:  add a sunset "));
    }

    #[test]
    fn test_style_transfer_overrides_brief() {
        let config = AdConfiguration::new().with_style(AdStyle::Studio);
        let entry = catalog::entry(AdStyle::Studio);
        for variation in Variation::ALL {
            let prompt = compose(AdStyle::Studio, variation, &config, true);
            assert!(prompt.contains(style_transfer_task(variation)));
            assert!(prompt.contains("Image 2: The Style Reference."));
            assert!(prompt.contains(entry.technical_spec));
            assert!(!prompt.contains(&entry.variation_text(variation, &config)));
        }
    }

    #[test]
    fn test_without_reference_no_second_image() {
        let prompt = compose(
            AdStyle::Ugc,
            Variation::Second,
            &AdConfiguration::new(),
            false,
        );
        assert!(prompt.contains("Image 1: The Product (HERO)."));
        assert!(!prompt.contains("Image 2"));
        assert!(!prompt.contains("TASK: "));
    }

    #[test]
    fn test_custom_context() {
        let none = compose(
            AdStyle::Studio,
            Variation::First,
            &AdConfiguration::new(),
            false,
        );
        assert!(none.contains("[ADDITIONAL USER CONTEXT]\nNone."));

        let config = AdConfiguration::new().with_custom_context("Add a sunset");
        let with = compose(AdStyle::Studio, Variation::First, &config, false);
        assert!(with.contains("USER REQUEST: Add a sunset"));
        assert!(!with.contains("\nNone."));
    }

    #[test]
    fn test_generic_entry_composes() {
        let entry = catalog::lookup("not-a-style");
        let prompt = compose_entry(entry, Variation::Third, &AdConfiguration::new(), false);
        assert!(prompt.contains("CONCEPT: Detail/Context."));
        assert!(prompt.contains(catalog::DEFAULT_TECHNICAL_SPEC));
    }

    #[test]
    fn test_compose_all_distinct() {
        let config = AdConfiguration::new().with_style(AdStyle::Lifestyle);
        let prompts = compose_all(&config);
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[1], prompts[2]);
        assert!(prompts.iter().all(|p| p.starts_with(ROLE)));
        assert!(prompts.iter().all(|p| p.ends_with("match the scene shadows.")));
    }
}
