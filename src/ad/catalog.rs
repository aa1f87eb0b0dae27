//! Style catalog: technical camera specs and the three prompt variations
//! for every ad style.
//!
//! The catalog is a table of [`StyleEntry`] records indexed by
//! [`AdStyle::index`]. Anything that does not resolve to a known style gets
//! [`GENERIC`], so lookups never fail.

use crate::ad::types::{AdConfiguration, AdStyle, Variation};

/// Baseline spec for styles without a dedicated camera setup.
pub const DEFAULT_TECHNICAL_SPEC: &str = "CAMERA: Professional DSLR (Canon/Sony). \
LIGHTING: Cinematic commercial lighting. RES: 4K, razor sharp focus on product.";

const DEFAULT_BENEFIT: &str = "Improved Quality of Life";
const DEFAULT_CELEBRITY: &str = "A Hollywood Star";

/// One variation's prompt text.
#[derive(Clone, Copy)]
pub enum Template {
    /// Fixed text.
    Static(&'static str),
    /// Text interpolating optional configuration fields.
    Dynamic(fn(&AdConfiguration) -> String),
}

impl Template {
    /// Renders the template for a configuration.
    pub fn render(&self, config: &AdConfiguration) -> String {
        match self {
            Self::Static(text) => (*text).to_string(),
            Self::Dynamic(build) => build(config),
        }
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Catalog record for one style.
#[derive(Debug)]
pub struct StyleEntry {
    /// The style this entry describes; `None` for the generic fallback.
    pub style: Option<AdStyle>,
    /// Camera/lighting/render baseline.
    pub technical_spec: &'static str,
    /// Prompt templates for variations 1, 2 and 3.
    pub variations: [Template; 3],
}

impl StyleEntry {
    /// Renders the prompt text for one variation.
    pub fn variation_text(&self, variation: Variation, config: &AdConfiguration) -> String {
        self.variations[variation.index()].render(config)
    }

    /// Returns true if this is the generic fallback entry.
    pub fn is_generic(&self) -> bool {
        self.style.is_none()
    }
}

/// Returns the catalog entry for a style.
pub fn entry(style: AdStyle) -> &'static StyleEntry {
    &CATALOG[style.index()]
}

/// Resolves a style by name or slug, falling back to [`GENERIC`] for
/// anything unrecognized.
pub fn lookup(tag: &str) -> &'static StyleEntry {
    match tag.parse::<AdStyle>() {
        Ok(style) => entry(style),
        Err(_) => {
            tracing::debug!(tag, "unknown ad style, using generic variations");
            &GENERIC
        }
    }
}

/// Fallback used for unknown styles.
pub static GENERIC: StyleEntry = StyleEntry {
    style: None,
    technical_spec: DEFAULT_TECHNICAL_SPEC,
    variations: [
        Template::Static("CONCEPT: Hero Shot. Best possible lighting, centered composition."),
        Template::Static(
            "CONCEPT: Creative Angle. Low angle, dramatic lighting, interesting background.",
        ),
        Template::Static(
            "CONCEPT: Detail/Context. Close up or environmental shot showing the product in use.",
        ),
    ],
};

static CATALOG: [StyleEntry; 13] = [
    StyleEntry {
        style: Some(AdStyle::Ecommerce),
        technical_spec: "CAMERA: Canon R5. LIGHTING: Even, shadowless high-key lighting (lightbox). \
BG: Pure white #FFFFFF or #F5F5F5.",
        variations: [
            Template::Dynamic(ecommerce_hero),
            Template::Static(ECOMMERCE_WHITE_STUDIO),
            Template::Static(ECOMMERCE_THUMBNAIL),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::SocialMedia),
        technical_spec: "CAMERA: Sony A7S III. LENS: 16-35mm Wide. COLOR: High saturation, \
'Dopamine' color grading, high contrast, sharp clarity. VIBE: Viral, scroll-stopping.",
        variations: [
            Template::Static(SOCIAL_HIGH_ENERGY),
            Template::Static(SOCIAL_PREMIUM_SHOWCASE),
            Template::Static(SOCIAL_VIBRANT_MARKETPLACE),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::Ugc),
        technical_spec: "CAMERA: Shot on iPhone 15 Pro Max. LENS: 24mm. LIGHTING: Natural, \
slightly messy mixed lighting. TEXTURE: Digital noise, unpolished, authentic social media look.",
        variations: [
            Template::Static(UGC_HANDHELD),
            Template::Static(UGC_HOME_SCENE),
            Template::Static(UGC_DAILY_LIFE),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::Testimonial),
        technical_spec: DEFAULT_TECHNICAL_SPEC,
        variations: [
            Template::Static(TESTIMONIAL_REVIEW),
            Template::Static(TESTIMONIAL_SOCIAL_PROOF),
            Template::Static(TESTIMONIAL_TRUST_ANCHOR),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::Benefit),
        technical_spec: DEFAULT_TECHNICAL_SPEC,
        variations: [
            Template::Dynamic(benefit_outcome),
            Template::Dynamic(benefit_function),
            Template::Dynamic(benefit_transformation),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::Lifestyle),
        technical_spec: "CAMERA: Fujifilm GFX 100. LENS: 80mm f/1.7. LIGHTING: Natural window \
light, golden hour sun flares. DEPTH: Shallow depth of field (Bokeh).",
        variations: [
            Template::Static(LIFESTYLE_NATURAL_USE),
            Template::Static(LIFESTYLE_ASPIRATIONAL),
            Template::Static(LIFESTYLE_ROUTINE),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::Studio),
        technical_spec: "CAMERA: Phase One XF IQ4. LENS: Macro 120mm. LIGHTING: Broncolor Para \
133, rim lighting, specular highlights. QUALITY: Ultra-high-end commercial advertising.",
        variations: [
            Template::Static(STUDIO_HIGH_END),
            Template::Static(STUDIO_DRAMATIC_EDGES),
            Template::Static(STUDIO_CATALOG),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::Pinterest),
        technical_spec: DEFAULT_TECHNICAL_SPEC,
        variations: [
            Template::Static(PINTEREST_COZY),
            Template::Static(PINTEREST_FLAT_LAY),
            Template::Static(PINTEREST_MOOD_BOARD),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::Celebrity),
        technical_spec: DEFAULT_TECHNICAL_SPEC,
        variations: [
            Template::Dynamic(celebrity_campaign),
            Template::Dynamic(celebrity_editorial),
            Template::Dynamic(celebrity_billboard),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::Iphone),
        technical_spec: "CAMERA: iPhone 15 Raw. LIGHTING: Direct hard flash (paparazzi style) or \
low-light night mode. VIBE: Candid, snapshot, unedited aesthetic.",
        variations: [
            Template::Static(IPHONE_APPLE_CAMERA),
            Template::Static(IPHONE_SOCIAL_CAMERA),
            Template::Static(IPHONE_MOBILE_VIBE),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::BeforeAfter),
        technical_spec: DEFAULT_TECHNICAL_SPEC,
        variations: [
            Template::Static(BEFORE_AFTER_SPLIT),
            Template::Static(BEFORE_AFTER_LIFESTYLE),
            Template::Static(BEFORE_AFTER_COMMERCIAL),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::Minimalist),
        technical_spec: "CAMERA: Hasselblad H6D-100c. LIGHTING: Soft global illumination, no \
harsh shadows. PALETTE: Monochromatic, matte textures.",
        variations: [
            Template::Static(
                "CONCEPT: Monochromatic Calm. Single color palette, soft shadows, matte textures.",
            ),
            Template::Static(
                "CONCEPT: Architectural Geometry. Hard shadows, concrete textures, strong lines.",
            ),
            Template::Static(
                "CONCEPT: Levitating Object. Floating product, no strings visible, soft gradient background.",
            ),
        ],
    },
    StyleEntry {
        style: Some(AdStyle::NeonCyberpunk),
        technical_spec: "RENDER: Unreal Engine 5 / Octane. FEATURES: Ray-tracing, volumetric fog, \
neon emission shaders, chromatic aberration. RES: 8K.",
        variations: [
            Template::Static(
                "CONCEPT: Rainy Night City.\n\
SCENE: Wet asphalt street reflecting neon signs.\n\
ATMOSPHERE: Rain, steam, bokeh city lights.\n\
COLORS: Cyan and Magenta.",
            ),
            Template::Static(
                "CONCEPT: The Matrix.\n\
SCENE: High-tech server room with green laser grids.\n\
SURFACE: Black glossy glass.\n\
VIBE: Hacker, futuristic, data.",
            ),
            Template::Static(
                "CONCEPT: Synthwave Sunset.\n\
BACKGROUND: A retro 80s wireframe grid sun setting in the distance.\n\
COLORS: Purple, Orange, Black.\n\
VIBE: Retro-futurism.",
            ),
        ],
    },
];

// Ecommerce

const ECOMMERCE_HERO: &str = "CONCEPT: Clean Marketplace Hero.\n\
Transform this product into a professional e-commerce hero image with the following \
specifications: Place on a pure #f8f8f8 background with seamless gradient. Apply three-point \
studio lighting - key light at 45° left creating soft highlights, fill light right side at 50% \
intensity to eliminate harsh shadows, rim light from behind-right for edge definition. Add \
realistic contact shadow with 15% opacity, 20px blur radius. Ensure product is perfectly \
centered, occupies 65% of frame, shot from eye-level angle. Enhance micro-textures, material \
details, and surface qualities. Maintain accurate color representation and proportions.";

fn ecommerce_hero(config: &AdConfiguration) -> String {
    let mut text = String::from(ECOMMERCE_HERO);
    if let Some(price) = config.price() {
        text.push_str(&format!(
            "\nADDITIONAL ELEMENT: Incorporate a minimalist, elegant price tag showing \"${price}\" \
floating near the product."
        ));
    }
    if let Some(offer) = config.offer_details() {
        text.push_str(&format!(
            "\nADDITIONAL ELEMENT: Include subtle text graphic indicating \"{offer}\"."
        ));
    }
    text
}

const ECOMMERCE_WHITE_STUDIO: &str = "CONCEPT: White Studio Premium Look.\n\
Create a luxury white studio product photograph simulating an 85mm f/2.8 lens at f/8 for \
maximum sharpness. Pure white seamless backdrop (#FFFFFF) with subtle 3% gray gradient towards \
bottom for depth. Position product on invisible acrylic surface creating natural mirror \
reflection at 25% opacity. Implement soft butterfly lighting setup - large softbox \
overhead-front creating wraparound illumination, edge lights at 30° angles for dimension. \
Ensure ultra-crisp focus on product, micro-contrast enhancement, subtle vignette (5% darkness at \
edges). Zero background noise, clinical precision, commercial photography perfection.";

const ECOMMERCE_THUMBNAIL: &str = "CONCEPT: Marketplace Thumbnail Optimized.\n\
Optimize for marketplace conversion with these parameters: Bright neutral background (#FAFAFA \
to #FFFFFF gradient), product isolated with clean alpha edges using 2px feather. Boost overall \
brightness +15%, contrast +20%, saturation +10% for screen visibility. Apply subtle clarity \
enhancement to product edges without creating halos. Position product in upper-center occupying \
70% of vertical space. Add barely-visible drop shadow (5% black, 8px offset, 15px blur) for \
lift. Color-correct to match real-world appearance under D65 illumination. Remove any \
distracting elements, watermarks, or text.";

// Social media

const SOCIAL_HIGH_ENERGY: &str = "CONCEPT: High-Energy Dynamic Format.\n\
Take the uploaded product image and place it as a centrally-positioned floating hero element. \
The composition uses a dynamic radial starburst or lightning bolt pattern radiating from the \
center in a primary color matching the product and a complementary electric secondary color.\n\
\n\
VISUAL ELEMENTS:\n\
- Intense radiant energy lines or electrical bolts surrounding the product.\n\
- Dramatic lighting with bright highlights on product surfaces.\n\
- Depth of field with sharp product focus and soft blurred background.\n\
- Subtle particle effects, motion blur trails, or energy waves emanating from product.\n\
- Strong shadows and light rays creating sense of power and movement.\n\
- High contrast between product and background.\n\
- Product appears to be floating or elevated with dramatic shadow beneath.\n\
\n\
LIGHTING & ATMOSPHERE:\n\
Enhance the product with bright, studio-quality lighting with strategic rim lighting and front \
highlights. Color saturation should be intense and motivational. The overall feeling should \
convey power, speed, innovation, and immediate action.\n\
\n\
COMPOSITION:\n\
Center-aligned, floating product appearance with product occupying 35-45% of frame.\n\
\n\
PROCESSING:\n\
Enhance product clarity, adjust brightness/contrast for maximum visibility against energetic \
background.";

const SOCIAL_PREMIUM_SHOWCASE: &str = "CONCEPT: Premium Modern Product Showcase Format.\n\
Take the uploaded product and present it as the dominant visual hero, emphasizing modern design \
and quality craftsmanship. Position the product to highlight its best angles, details, and \
materials.\n\
\n\
PRODUCT POSITIONING:\n\
- Angle product at 45° perspective or front-facing view to showcase form and quality.\n\
- Create floating or elevated appearance with subtle shadow beneath.\n\
- Enhance clarity and visibility of product details, textures, and premium materials.\n\
- Adjust brightness to reveal fine details and material quality.\n\
\n\
BACKGROUND TREATMENT:\n\
- Apply sophisticated gradient background (Deep Purple, Navy, or Charcoal fading to lighter \
tone) suggesting premium quality.\n\
- Add subtle geometric elements, light particle effects, or bokeh in background.\n\
- Maintain clean, minimal aesthetic.\n\
- Strong visual separation from product.\n\
\n\
LIGHTING ENHANCEMENT:\n\
- Apply professional studio-grade lighting.\n\
- Add rim lighting on product edges for definition and luxury feel.\n\
- Enhance highlight reflections showing product quality and materials.\n\
- Create high contrast between product and background.\n\
- Suggest motion or energy through subtle light rays or particle effects.";

const SOCIAL_VIBRANT_MARKETPLACE: &str = "CONCEPT: Vibrant Marketplace Format.\n\
Take the uploaded product and present it in a vibrant, eye-catching composition with bold, \
saturated colors and dynamic energy.\n\
\n\
VISUAL TREATMENT:\n\
- Product positioned as dominant hero (35-40% of frame).\n\
- Bright, saturated color background (Pick a dominant vibrant color from the product's palette).\n\
- Dynamic diagonal lines, geometric shapes, or abstract elements suggesting movement.\n\
- Crisp, clean product presentation with maximum clarity.\n\
- Strong shadows and highlights creating dimension.\n\
- High visual energy and movement.\n\
\n\
LIGHTING:\n\
- Bright, cheerful studio lighting.\n\
- Clear product visibility against vibrant background.\n\
- Enhanced color saturation for maximum appeal.\n\
- Sharp focus and clarity.\n\
\n\
BACKGROUND ELEMENTS:\n\
- Bold, solid color or vibrant gradient.\n\
- Geometric patterns, abstract shapes, diagonal elements.\n\
- High contrast with product.\n\
- Clean, modern aesthetic.\n\
\n\
OPTIMIZATION:\n\
Sharpen details, enhance colors, increase vibrancy, ensure maximum pop against background. \
Mood: Energetic, fun, accessible, modern, youthful.";

// UGC

const UGC_HANDHELD: &str = "CONCEPT: Handheld Realism.\n\
Simulate authentic mobile-captured UGC photo: Replicate smartphone camera characteristics - \
slightly wider angle of view (28mm equivalent), natural perspective distortion, HDR processing \
look with balanced highlights and shadows. Lighting from available sources - ceiling lights, \
window light, or mixed indoor ambient creating realistic but uncontrolled shadows. Add subtle \
motion blur edge (1-2px) suggesting handheld capture. Include minor imperfections: slight tilt \
(2-3° off-level), not perfectly centered composition, realistic digital noise in shadows (ISO \
400-800 equivalent). Product shown in real-use context - on table, in hand, or actual usage \
scenario. Color profile matches smartphone processing: slightly boosted saturation, lifted \
shadows, controlled highlights. Maintain authentic feel over perfection - 85% sharp, natural \
light falloff, genuine atmosphere.";

const UGC_HOME_SCENE: &str = "CONCEPT: Casual Home Scene.\n\
Create convincing customer testimonial photo aesthetic: Home environment setting with natural \
window light as primary source - soft, directional, creating organic shadows and highlights. \
Product placed on real surfaces: wooden table, kitchen counter, bedside table, desk with natural \
wear and texture visible. Background shows authentic home details: blurred furniture, wall, \
plants, books - lived-in feeling. Apply window light characteristics: gentle falloff, color \
temperature 5000-6500K depending on time of day, subtle ambient bounce from walls. Include \
realistic reflections on surfaces. Add organic camera shake blur (very subtle), natural color \
balance without heavy editing, slight chromatic aberration in corners for lens authenticity. \
Grain structure matching older smartphone or casual camera (ISO 200-400). Composition casual \
but product clearly featured.";

const UGC_DAILY_LIFE: &str = "CONCEPT: Daily Life UGC Look.\n\
Generate daily-routine authentic content style: Workspace or home setting during actual use - \
morning desk, evening relaxation, daily ritual context. Mixed lighting creating realistic \
ambiance - combination of natural window light and artificial indoor lighting (LED warmth \
~3000K), creating authentic color temperature mix. Background intentionally includes daily \
life: laptop, notebook, coffee mug, phone - creating relatable narrative. Apply gentle \
background blur (f/5.6 equivalent) keeping context readable but focus on product. Soft overall \
exposure, lifted shadows revealing details, highlights controlled naturally. Add subtle film \
grain (4%), minor lens distortion at edges, realistic color science without Instagram filters. \
Product interaction suggested - angle showing use case, natural placement in routine. Include \
authentic imperfections: not perfectly clean background, slight overexposure from window, \
natural shadow patterns.";

// Testimonial

const TESTIMONIAL_REVIEW: &str = "CONCEPT: Review Visual.\n\
Design customer review accompanying image: Clean but approachable setting - simple background \
with minimal distraction (solid wall, clean surface, neutral space) in warm neutral tones \
(#E8E4DF to #F5F3F0). Friendly lighting setup: soft overhead-front light creating open, \
inviting shadows, color temperature 4000K for warm welcoming feel. Product positioned to show \
key features clearly - slight 3/4 angle revealing dimension and detail. Apply trust-building \
color treatment: natural accurate colors, slight warmth in highlights (+5 temperature), shadows \
lifted +10 for openness and honesty feel. Include subtle environmental context suggesting real \
customer ownership - edge of table, partial background room element, lived-with quality. \
Sharpness on product with gentle background softness (f/8 equivalent). Add barely perceptible \
grain (2%) for organic authenticity. Composition balanced but not overly professional - genuine \
customer care visible.";

const TESTIMONIAL_SOCIAL_PROOF: &str = "CONCEPT: Social Proof Look.\n\
Create authentic post-purchase customer sharing photo: Cozy lifestyle environment - home living \
room, personal workspace, or bedroom setting with warm inviting atmosphere. Natural mixed \
lighting: window light combined with warm interior lighting creating homey ambiance (2800-4500K \
color temperature range). Product shown in actual use context or unboxing moment - on lap, on \
couch, fresh from package with subtle packaging elements visible. Background deliberately \
casual: blurred sofa, bookshelf, wall art, plants - personal space indicators. Apply realistic \
smartphone photo processing: moderate saturation, lifted blacks, HDR tone-mapping look, slight \
clarity boost. Include authentic composition imperfections: slightly off-center, captured \
moment feel, natural shadows from surroundings. Subtle vignette (8%) creating intimate focus. \
Soft overall sharpness (90% crisp) suggesting quick genuine capture. Fine noise in darker areas \
(ISO 320 equivalent).";

const TESTIMONIAL_TRUST_ANCHOR: &str = "CONCEPT: Trust Anchor Visual.\n\
Generate trustworthiness-focused testimonial imagery: Neutral warm environment creating comfort \
and reliability - soft beige/cream backgrounds (#EDE7E1), clean uncluttered surfaces, gentle \
ambient atmosphere. Implement reassuring lighting: diffused even illumination from front-top \
preventing harsh shadows, color temperature 4200K for warm professional trust balance. Product \
clearly visible showing quality and detail - positioned at comfortable viewing angle (15° from \
straight-on), occupying 50-60% of frame. Apply subtle emotional color grading: warm shadows, \
neutral mid-tones, slightly cool highlights for premium feel, overall lifted exposure conveying \
openness. Background minimal but relatable - hint of home/office environment creating \
connection without distraction. Sharpness distribution: product critically sharp, background \
gentle softness (f/11 equivalent depth). Include subtle quality indicators: good lighting \
revealing texture, clean presentation, honest representation.";

// Benefit

fn benefit(config: &AdConfiguration) -> &str {
    config.benefit_text().unwrap_or(DEFAULT_BENEFIT)
}

const BENEFIT_OUTCOME: &str = "CONCEPT: Outcome Visualization.\n\
Create benefit-demonstration visual narrative: Split or implied comparison showing \
problem-solution through environmental context. Product positioned as hero solution with \
supporting background elements illustrating the improved outcome - organized vs cluttered, \
efficient vs difficult, comfortable vs uncomfortable scenario suggested through setting and \
lighting. Implement dramatic but realistic lighting: spotlight effect on product (key light \
intensity 100%, fill 30%) with background receiving 50% illumination showing context clearly. \
Apply visual hierarchy through focus: product sharp critical focus, benefit-context in \
controlled sharpness (f/8-f/11 equivalent). Color psychology application: product lit with \
appealing warm highlights (3800K key light), solution-space in satisfied neutral tones, subtle \
visual arrows created through light direction pointing toward product. Background clean \
professional but contextual - office for productivity, home for comfort, gym for performance \
based on benefit type.";

fn benefit_outcome(config: &AdConfiguration) -> String {
    format!(
        "{BENEFIT_OUTCOME}\nVISUAL FOCUS: Visually demonstrate the specific benefit: \"{}\".",
        benefit(config)
    )
}

const BENEFIT_FUNCTION: &str = "CONCEPT: Functional Demonstration.\n\
Design usage-outcome emphasis advertisement: Show product in active use context or positioned \
to clearly suggest function - ergonomic placement for comfort products, speed-suggesting \
dynamic arrangement, quality demonstrated through premium setting. Lighting emphasizes \
functionality: directional light highlighting key functional features, creating shadows that \
demonstrate form-follows-function design. Apply clarity-enhancement specifically to areas \
showing benefit: texture emphasis for comfort, sleek highlights for speed/efficiency, material \
detail for quality. Background reinforces benefit category: clean minimal for simplicity \
benefits, dynamic angle for performance, warm cozy for comfort, bright airy for \
health/wellness. Implement benefit-appropriate color treatment: energizing vibrant for \
performance products, soothing muted for relaxation, precise neutral for professional tools. \
Product positioning demonstrates ease-of-use through natural comfortable placement. Depth of \
field isolates product benefit zone (f/4-f/5.6). Include environmental proof elements: clean \
workspace for organization products, relaxed setting for comfort.";

fn benefit_function(config: &AdConfiguration) -> String {
    format!(
        "{BENEFIT_FUNCTION}\nVISUAL FOCUS: Ensure the image clearly highlights how the product \
achieves \"{}\".",
        benefit(config)
    )
}

const BENEFIT_TRANSFORMATION: &str = "CONCEPT: Transformation Emphasis.\n\
Generate performance-focused transformation visual: Product dominating composition (75% frame \
presence) as the change-agent hero. Background staging creates before-implied/after-shown \
narrative through environmental quality - elevated setting suggesting improvement achieved. \
Dramatic lighting creating transformation metaphor: strong key light from side creating \
definition and change separation, gradient background light from dark to bright suggesting \
progression. Product positioned in power position - centered or golden ratio point, elevated \
slightly, commanding presence. Apply premium transformation color grading: deep rich shadows \
showing depth of change, luminous highlights on product suggesting elevation, saturated product \
colors against more muted environment creating pop and focus. Background elements subtly \
suggest result category: success context for achievement products, health environment for \
wellness, premium space for luxury. Include visual energy through light rays, glow effects \
(subtle 10-15% opacity), or contrast edges. Sharp detail on product with background at f/5.6 \
equivalent.";

fn benefit_transformation(config: &AdConfiguration) -> String {
    format!(
        "{BENEFIT_TRANSFORMATION}\nVISUAL FOCUS: The transformation topic is \"{}\".",
        benefit(config)
    )
}

// Lifestyle

const LIFESTYLE_NATURAL_USE: &str = "CONCEPT: Natural Use Case.\n\
Create authentic day-in-life product integration: Place product within genuine daily activity \
scene - morning routine (bathroom counter, kitchen), work session (desk, coffee shop), evening \
wind-down (living room, bedroom). Natural available lighting simulation: soft window light as \
primary source (north-facing window quality, 6000K), ambient room lights as fill (3000K LED \
warmth), creating realistic mixed-temperature environment. Product positioned organically \
within scene as natural participant, not staged focal point - 35-45% of composition, allowing \
lifestyle context to tell story. Apply realistic depth of field: f/4-f/5.6 equivalent keeping \
product and immediate interaction zone sharp, background contextual environment in gentle \
focus. Color treatment natural lifestyle editorial: true-to-life colors, subtle warmth boost \
(+8), lifted shadows showing environment details, controlled highlights maintaining window \
detail. Include authentic scene elements: user belongings, daily items, lived-in textures. \
Capture moment feeling - as if photographed during actual use.";

const LIFESTYLE_ASPIRATIONAL: &str = "CONCEPT: Aspirational Look.\n\
Design upward-lifestyle aspiration imagery: Elevated environment suggesting desired lifestyle - \
modern apartment with design furniture, trendy café corner, boutique hotel room aesthetic, \
curated workspace. Implement golden hour or sophisticated lighting: warm directional natural \
light (4500-5000K) creating luxury glow, gentle shadows adding dimension and aspiration depth. \
Product integrated into aspirational scene maintaining relatability - achievable aspiration not \
fantasy. Apply aspirational color grading: lifted overall exposure suggesting brightness of \
ideal life, warm golden shadows, slight teal/orange complementary split toning (shadows warm \
+10, highlights cool -5), enhanced vibrancy in environment (+15). Composition following \
aesthetic principles: rule of thirds, leading lines from environment to product, balanced \
negative space suggesting breathing room and success. Background styling magazine-quality but \
authentic: designer objects, plants, quality materials, curated imperfection. Depth at f/2.8 \
equivalent: product sharp, environment recognizable but dreamy. Include subtle lifestyle \
indicators: quality coffee, design book, premium materials.";

const LIFESTYLE_ROUTINE: &str = "CONCEPT: Routine Moment.\n\
Capture relatable ritual moment storytelling: Specific routine scenario - morning coffee desk \
setup, nighttime bedside wind-down, afternoon work break, weekend relaxation moment. \
Time-of-day appropriate lighting: morning (cool bright 6500K from window), afternoon (warm \
neutral 5000K), evening (warm ambient 3000K interior lights), night (cozy 2700K bedside lamp). \
Product positioned as ritual participant showing regular use integration - morning (with \
coffee, journal, laptop), evening (with book, tea, dim lighting), weekend (casual relaxed \
placement). Apply moment-specific mood through color: morning fresh bright lifted, afternoon \
balanced natural, evening warm intimate shadows. Environmental context building routine \
narrative: consistent backgrounds showing same space at different times, or activity-specific \
settings (coffee bar for morning, reading nook for evening, patio for weekend). Depth of field \
matches intimacy: morning f/5.6 showing context, evening f/2.8 for cozy isolation. Include \
routine props creating narrative: steam from coffee, open book, phone on charging, blanket \
texture. Authentic imperfect composition suggesting captured moment not posed scene.";

// Studio

const STUDIO_HIGH_END: &str = "CONCEPT: High-End Lighting.\n\
Execute professional commercial studio photography setup: Dark gradient background (#1A1A1A to \
#000000) creating premium dramatic space. Implement classic three-point lighting: large octabox \
key light camera-left 45° creating soft wrap-around illumination with defined but gentle shadow \
edge, fill light camera-right at 1:4 ratio maintaining shadow detail, hair/rim light from \
behind-right at 70° creating edge separation and dimension. Add gradient light on background: \
spotlight creating circular glow (#2A2A2A center) behind product for depth and focus draw. \
Product elevated on seamless surface with subtle reflection (20% opacity) suggesting glass or \
acrylic platform. Apply premium commercial retouching: enhanced micro-contrast, subtle frequency \
separation smoothing, specular highlights controlled and shaped. Maintain product realism - no \
CGI feel, accurate materials, true color under studio D65 lighting standard. Sharpness at \
commercial level: f/11 equivalent, focus stacking simulation if needed.";

const STUDIO_DRAMATIC_EDGES: &str = "CONCEPT: Dramatic Edges.\n\
Create cinematic studio commercial visual: Pure black background (#000000) for maximum drama \
and product isolation. Implement dramatic edge lighting technique: strong rim lights from both \
back corners (80% intensity) creating glowing outline on product edges - emphasizing form, \
dimension, and premium quality. Key light from front-left softbox (60% intensity) filling \
product face with controlled illumination, maintaining shadow depth. Add subtle kicker light \
from bottom-front creating under-glow on reflective surfaces and base. Product positioned on \
glossy black acrylic creating mirror reflection (40-50% opacity) extending drama vertically. \
Apply cinematic color grading: rich deep blacks (RGB 0,0,0), controlled highlights preventing \
blowout, subtle warm-cool split (shadows 3200K, highlights 5600K), enhanced local contrast on \
product edges. Include selective glow effects on specular highlights (10% bloom). Sharpness \
critical on all edges - f/16 equivalent, no softness tolerance. Material rendering: metals show \
controlled specular, fabrics show texture detail, plastics show surface quality.";

const STUDIO_CATALOG: &str = "CONCEPT: Catalog Shoot.\n\
Generate classic catalog photography standard: Neutral mid-gray background (#808080 to #A0A0A0 \
gradient) providing color-neutral reference for accurate product representation. Implement even \
catalog lighting: large front softbank creating shadowless illumination, overhead fill \
maintaining consistent brightness across product height, side fills preventing any shadow \
pockets. Product positioned perfectly centered, straight-on or 3/4 standard catalog angle, \
occupying 70% frame height following retail catalog conventions. Apply catalog color accuracy: \
sRGB color space, color checker referenced white balance, accurate material representation \
without artistic interpretation, shadows lifted to show all product details, highlights \
controlled showing texture in light areas. Perfect geometric alignment: product vertical lines \
truly vertical, horizontal lines level, symmetrical products showing perfect symmetry. Surface \
clean and flawless - dust removal, reflection control, seamless background. Sharpness evenly \
distributed: f/11-f/16 equivalent, entire product in critical focus from front to back. Include \
subtle shadow base (8% opacity) providing ground reference without drama.";

// Pinterest

const PINTEREST_COZY: &str = "CONCEPT: Cozy Aesthetic.\n\
Create Pinterest-optimized cozy aesthetic imagery: Warm neutral background palette (beige \
#E8DCC8, cream #F5EFE7, soft terracotta #D4A574) creating comforting color story. Implement soft \
diffused window lighting: gentle directional light suggesting late afternoon (4200K color \
temperature), creating soft shadows with high fill ratio (1:2) for that wrapped-in-warmth \
feeling. Product positioned within carefully curated aesthetic scene: natural textures (linen \
fabric, wood surface, ceramic vessels), dried florals or pampas grass, neutral-toned books, \
organic shapes. Apply Pinterest cozy color grading: warm lifted overall (+12 temperature), \
crushed shadows with brown undertones, highlights with subtle peachy glow, reduced contrast for \
soft gentle feel (-10 contrast, +15 shadow detail). Composition follows flat-lay or styled \
surface approach: overhead 45° angle, organized casual arrangement, negative space for text/pin \
description. Include tactile elements: knit textures, smooth ceramics, natural fibers, matte \
surfaces. Depth subtle: f/8 equivalent keeping styling sharp while background gently soft. Add \
fine grain (3%) for film-like cozy quality.";

const PINTEREST_FLAT_LAY: &str = "CONCEPT: Flat Lay Look.\n\
Design Pinterest flat-lay composition perfection: Soft pastel or neutral background - blush \
pink (#FAE5E5), sage green (#D4E4D8), warm white (#FDFBF7), or soft gray (#E8E8E8). Overhead \
directly-down perspective (90° from surface) creating classic flat-lay geometry. Implement soft \
even lighting: large diffused light source from camera position creating minimal shadows, \
subtle directional hint from top-left creating gentle dimension without harsh shadows, color \
temperature 5500K for natural daylight clarity. Product arranged following flat-lay \
principles: geometric precision, breathing room between elements, rule of thirds positioning, \
diagonal flow creating visual movement. Styling elements coordinated: color palette max 3-4 \
colors, repeated shapes creating rhythm, size variation for interest, natural organic items \
(flowers, leaves, coffee, fabric). Apply Pinterest-friendly processing: slightly lifted \
exposure for brightness, enhanced clarity on product details (+10), subtle vibrance boost \
(+12), soft subtle vignette (5%) drawing eye center. Shadows transparent and detailed, \
highlights controlled and textured. Sharpness even across plane: f/11 equivalent, consistent \
focus entire surface. Include subtle styling shadows for depth while maintaining airiness.";

const PINTEREST_MOOD_BOARD: &str = "CONCEPT: Mood Board Look.\n\
Generate Pinterest mood-board aesthetic visual: Cohesive color story background - \
monochromatic scheme or complementary palette (sage + terracotta, cream + charcoal, blush + \
gold). Implement aesthetic editorial lighting: soft beauty light creating gentle gradients, \
diffused shadows suggesting time of day (morning fresh or evening golden), color temperature \
matching mood (cool 6000K for fresh minimal, warm 4000K for cozy rich). Product styled within \
curated aesthetic composition: complementary objects telling story (vintage books for \
nostalgia, modern ceramics for contemporary, natural elements for organic), layered depth \
through foreground and background elements, color and texture coordination across all \
elements. Apply mood-specific color grading: minimal aesthetic (desaturated -15, lifted \
shadows, cool tones), warm cozy (saturated earth tones +10, warm temperature +15, rich \
shadows), fresh modern (bright overall, slightly cooled highlights, vibrant accents). \
Composition creating Pinterest-save urge: aspirational but achievable, clear focal point, \
visual balance, implied lifestyle narrative. Include texture variety: matte and gloss, rough \
and smooth, natural and refined. Depth creates dimension: f/4-f/5.6 equivalent, layered focus \
zones. Add subtle film character: gentle grain (2-4%), slight fade in blacks for vintage touch.";

// Celebrity

fn celebrity(config: &AdConfiguration) -> &str {
    config.celebrity_name().unwrap_or(DEFAULT_CELEBRITY)
}

const CELEBRITY_CAMPAIGN: &str = "CONCEPT: Luxury Campaign Feel.\n\
Create high-fashion celebrity campaign aesthetic: Dramatic premium environment - black backdrop \
with subtle texture, spotlight isolated area, or luxury interior (marble, velvet, gold \
accents). Implement editorial spotlight lighting: strong focused key light creating defined \
shadow edge and drama (like magazine cover lighting), subtle rim lighting creating glamorous \
outline, controlled fill maintaining mystery in shadows (1:8 key-to-fill ratio). Product \
positioned as luxury object of desire - elevated on premium surface, heroic angle slightly from \
below suggesting aspiration, occupying 40-50% of composition with space for implied celebrity \
presence or hand interaction. Apply luxury editorial color grading: rich saturated colors with \
depth, crushed blacks creating contrast drama, golden highlights suggesting wealth (warm 3400K \
in highlights), cool shadows for sophistication (6500K), enhanced local contrast creating \
dimension. Include luxury signifiers in environment: premium materials visible, soft bokeh \
suggesting upscale location, subtle gold or metallic accents. Depth dramatic: f/2.8 equivalent \
creating separation, product critically sharp against creamy background blur. Add subtle lens \
characteristics: gentle vignette (15%), slight chromatic aberration on specular highlights for \
high-end lens feel.";

fn celebrity_campaign(config: &AdConfiguration) -> String {
    format!(
        "{CELEBRITY_CAMPAIGN}\nCONTEXT: The style should imply endorsement by {}.",
        celebrity(config)
    )
}

const CELEBRITY_EDITORIAL: &str = "CONCEPT: Magazine Editorial.\n\
Design editorial magazine endorsement photography: High-contrast editorial setup - clean white \
cyc wall, dramatic gray gradient, or environmental location suggesting affluence (penthouse \
view, luxury hotel, designer space). Implement fashion photography lighting: beauty dish or \
large octabox creating wraparound flattering light with defined but soft edges, hair light \
creating separation, kicker lights adding dimension and polish. Product integrated into \
editorial scene - hand-model interaction suggested through positioning, lifestyle props \
indicating affluent taste (designer sunglasses, luxury watch, premium materials nearby), \
magazine-worthy styling. Apply editorial color treatment: enhanced contrast creating punch \
(+25), selective color emphasis (product pops while environment slightly desaturated), cool \
professional temperature (5800K base), highlights protected showing texture, shadows detailed \
but deep. Composition following magazine layout: vertical portrait orientation accounting for \
text placement zones, negative space for headlines/copy, subject positioned at golden ratio \
points. Include editorial production values: perfectly styled environment, no casual elements, \
intention visible in every detail, hair and edge control. Depth suitable for cover: f/4-f/5.6 \
keeping product and context sharp while creating separation from background. Add magazine \
finishing: subtle sharpening on product edges, micro-contrast for dimension, overall polish \
without over-processing.";

fn celebrity_editorial(config: &AdConfiguration) -> String {
    format!(
        "{CELEBRITY_EDITORIAL}\nCONTEXT: Style similar to a photoshoot for {}.",
        celebrity(config)
    )
}

const CELEBRITY_BILLBOARD: &str = "CONCEPT: Billboard Premium Feel.\n\
Generate billboard-scale endorsement visual impact: Bold simple composition - solid color \
background or minimal gradient (deep navy #1A2B4A, rich burgundy #6B1B2E, or pure black \
#000000), maximum product visibility at distance, strong geometric layout. Implement dramatic \
advertising lighting: hard light creating defined shadows and dimension (like \
automotive/luxury advertising), perfect specular highlights showing premium quality, rim \
lighting creating luminous edges visible from distance. Product positioned for billboard \
hierarchy - larger than life scale (60-70% frame), power position (centered or strong third), \
angle suggesting confidence and aspiration (slightly from below creating importance). Apply \
billboard color strategy: oversaturated product colors for visibility (+30 saturation on \
product, environment controlled), maximum contrast for readability at distance (blacks at 0, \
highlights controlled at 95%), color separation between product and background creating \
instant recognition. Include premium indicators scaled for distance: metal surfaces showing \
reflective quality, texture visible and enhanced, form clear and dimensional. Composition \
billboard-optimized: horizontal 3:1 aspect ratio consideration, focal point in optical center, \
no fine details lost at scale. Depth minimal distraction: f/11 equivalent keeping product \
sharp, background simplified. Add billboard finishing: edge contrast enhancement, slight glow \
on highlights (8%) for premium shimmer, overall clarity boost for outdoor visibility.";

fn celebrity_billboard(config: &AdConfiguration) -> String {
    format!(
        "{CELEBRITY_BILLBOARD}\nCONTEXT: A billboard ad featuring the product endorsed by {}.",
        celebrity(config)
    )
}

// iPhone

const IPHONE_APPLE_CAMERA: &str = "CONCEPT: Apple Camera Realism.\n\
Simulate authentic iPhone 15 Pro computational photography: Replicate Apple's processing \
characteristics - Smart HDR 5 look with balanced highlights and lifted shadows, Deep Fusion \
texture rendering in mid-tones, slightly boosted vibrance without oversaturation. Lighting from \
available sources creating iPhone-typical exposure: window light, indoor ceiling lights, or \
outdoor natural light, with characteristic iPhone shadow recovery and highlight protection. \
Apply iPhone color science: slightly warm overall tone (Apple's preferred 5200K white balance), \
enhanced greens and blues (Apple's color bias), subtle contrast curve creating \"pop\" without \
harshness. Include iPhone lens characteristics: 26mm main camera field of view, subtle barrel \
distortion at edges (1-2%), edge sharpness falloff from center, slight vignette (5%). Add \
computational photography artifacts: minimal noise in shadows (Apple's aggressive noise \
reduction), slight halo around high-contrast edges (HDR processing), micro-sharpening creating \
clarity perception. Product captured in casual but intentional composition - rule of thirds \
placement, natural environmental context, handheld perspective with slight human imperfection \
(1-2° tilt acceptable). Depth simulation: Portrait mode bokeh if close (smooth gradient blur, \
edge detection quality of iPhone), or natural depth if environmental shot. Color rendering \
slightly saturated in pleasing way (+8 vibrance, +3 saturation).";

const IPHONE_SOCIAL_CAMERA: &str = "CONCEPT: Social Camera Look.\n\
Create unfiltered iPhone social media capture aesthetic: Standard iPhone camera app look - \
auto-exposure sometimes slightly bright (Apple's exposure bias +0.3EV), auto white balance \
occasionally warm indoors or cool in shade (color casts acceptable and authentic). Lighting \
realistic social capture: harsh sun creating strong shadows if outdoor, mixed color \
temperatures if indoor (window + tungsten creating color variety), flash if needed showing \
iPhone LED characteristics (slightly cool, center-bright, natural falloff). Apply zero-filter \
iPhone processing: Smart HDR creating even tones, auto-enhance slight clarity boost, sharpening \
preset giving definition without over-processing, natural color saturation matching scene. \
Include authentic capture characteristics: slight motion blur if handheld in lower light, focus \
occasionally soft if auto-focus caught between subjects, composition casual rule-of-thirds with \
comfortable imperfection. Product shown in social posting context - coffee shop table, bedroom, \
car, outdoor activity - scenarios where people actually take iPhone photos. Depth natural: \
single lens characteristic (no Portrait mode), natural background relationship to subject \
distance, realistic bokeh from iPhone f/1.78 aperture when close. Add iPhone file \
characteristics: slight noise in lower light (ISO 320-800 visible grain), highlight clipping if \
bright window in frame (authentic iPhone challenge), shadow detail recovered showing Apple's \
processing.";

const IPHONE_MOBILE_VIBE: &str = "CONCEPT: Mobile Photography Vibe.\n\
Generate realistic smartphone camera capture feel: Mobile camera perspective - slightly higher \
or lower than professional tripod height (handheld natural angles), casual framing with product \
not perfectly centered, authentic human decision-making in composition. Implement smartphone \
lighting limitations and strengths: auto-exposure finding balance (sometimes blowing highlights \
or blocking shadows like mobile cameras do), auto white balance interpretation creating color \
character, dynamic range compressed like mobile sensor (not full-frame camera latitude). Apply \
smartphone digital processing: aggressive sharpening creating defined edges, noise reduction \
smoothing shadows sometimes too much, micro-contrast enhancement creating visual pop, slight \
color boosting for screen viewing. Include authentic mobile capture imperfections: slight \
motion blur from hand shake (no IS perfection), focus hunting result (sometimes nose-focused \
when eye intended), exposure hunting creating uneven brightness zones. Product in genuine \
mobile capture scenario - quick product snap, sharing with friends, documenting purchase, \
casual lifestyle integration. Color science smartphone-typical: slightly saturated pleasing \
colors, warm-cool split toning from auto processing, enhanced specific colors (skin tones, \
greens, blues) while others neutral. Depth smartphone-natural: smaller sensor creating deeper \
depth of field, background more in-focus than full-frame equivalent, bokeh less creamy more \
busy. Add smartphone file artifacts: compression artifacts in solid colors if social media \
upload simulation, edge enhancement halos, slight color banding in gradients.";

// Before & after

const BEFORE_AFTER_SPLIT: &str = "CONCEPT: Visual Comparison Split (Refined & Enhanced Master Version).\n\
Create a side-by-side before and after visual comparison using the uploaded image.\n\
Structure: Split image vertically at exact 50/50 ratio. Left side = \"BEFORE\" state (problem \
condition). Right side = \"AFTER\" state (solution condition). Maintain identical framing, \
perspective, camera angle, cropping, and scale on both sides for true comparison accuracy.\n\
\n\
BEFORE SIDE (Problem State Rendering):\n\
Apply:\n\
- Lighting: dim warm ambient lighting at 3200K\n\
- Exposure: underexposed by –0.5 stops\n\
- Saturation: reduce by –20\n\
- Contrast: reduced to create flatness\n\
- Sharpness: mild softening (–10 clarity)\n\
- Mood: dull, tired, inconvenient, problematic\n\
- Environment: cluttered, chaotic, outdated, or uncomfortable\n\
- Product (if relevant): absent or replaced with inferior alternative\n\
- Emotional tone: frustration, inefficiency, dissatisfaction\n\
\n\
AFTER SIDE (Solution State Rendering):\n\
Apply:\n\
- Lighting: bright natural daylight at 5500K\n\
- Exposure: proper balanced exposure +10 brightness\n\
- Saturation: increase +15\n\
- Contrast: rich but clean\n\
- Sharpness & Texture: enhanced clarity\n\
- Mood: confident, fresh, positive, premium\n\
- Environment: organized, upgraded, calm, beneficial\n\
- Product (if relevant): properly placed, hero-positioned, visually central\n\
- Emotional tone: improvement, ease, relief, success\n\
\n\
Final Output Settings:\n\
Divider: clean vertical separator at center with subtle 2px white border or shadow.\n\
Lens look: equivalent to f/8 sharp detail both sides.\n\
Background: same room/environment, reorganized.\n\
Optimization: designed for Facebook, Google Display, Shopify, and landing pages. Make \
transformation obvious in < 1 second of viewing.";

const BEFORE_AFTER_LIFESTYLE: &str = "CONCEPT: Before / After Lifestyle Impact Story.\n\
Create a lifestyle-based before and after transformation using the uploaded image.\n\
Composition Rules: Split-screen comparison with perfect camera alignment and framing lock. \
Identical composition on both sides. Vertical or horizontal split allowed but divider must be \
clean and intentional.\n\
\n\
BEFORE SIDE (Emotional Problem Reality):\n\
Render the image as:\n\
- Lighting: low ambient, yellow-tinted 3000–3400K\n\
- Color tone: faded, dull, slightly grayish\n\
- Environment: chaotic or empty, shows struggle or inefficiency\n\
- Expression/mood (if people exist): stressed, tired, bored, frustrated\n\
- Visual storytelling: show difficulty, confusion, limitation\n\
- Texture: slightly grainy, lifeless\n\
- Composition feeling: cramped, uncomfortable, limiting\n\
\n\
AFTER SIDE (Lifestyle Upgrade & Outcome):\n\
Render as:\n\
- Lighting: bright neutral daylight 5200–5800K\n\
- Color tone: rich, alive, warm contrast\n\
- Environment: tidy, balanced, attractive\n\
- Subject emotion: relaxed, confident, happy, productive\n\
- Visual storytelling: show improvement because of the solution\n\
- Texture: crisp, clear, fresh\n\
- Composition feeling: open, luxurious, appealing\n\
\n\
Divider & Output: Use middle divider with light glow or soft shadow. Maintain precise framing \
and scale across both sides. Visual message must be instantly readable with no text. Make \
viewer say: \"I want what’s on the right side.\"";

const BEFORE_AFTER_COMMERCIAL: &str = "CONCEPT: Commercial Grade Product Comparison Ad.\n\
Design a high-impact marketing-grade before & after ad from the uploaded photo.\n\
Layout: Vertical split screen (50% before, 50% after). Global framing locked identically both \
sides. No zoom, no perspective distortion.\n\
\n\
BEFORE SIDE — Commercial Failure Look:\n\
Apply:\n\
- Lighting: flat overhead indoor 3000–3400K\n\
- Contrast: low\n\
- Colors: muted\n\
- Shadows: harsh or incorrect\n\
- Background: messy, low-quality, outdated\n\
- Visual feel: cheap, inconvenient, undesirable\n\
- Framing: feels accidental or amateur\n\
\n\
AFTER SIDE — Commercial Success Look:\n\
Apply:\n\
- Lighting: professional daylight simulation\n\
- Contrast: cinematic but natural\n\
- Colors: vibrant but realistic\n\
- Shadows: soft and directional\n\
- Background: intentional, premium-looking setup\n\
- Framing: centered hero effect\n\
- Visual feel: retail-grade, advertisement ready\n\
\n\
Production Instructions:\n\
Border: 2–4px clear divider.\n\
Add subtle environment cues: before = struggle, clutter, downgrade; after = success, upgrade, \
comfort. Keep realistic, not surreal. We want commercial believability, not fantasy.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_styles() {
        for style in AdStyle::ALL {
            assert_eq!(entry(style).style, Some(style));
        }
    }

    #[test]
    fn test_default_spec_styles() {
        for style in [
            AdStyle::Testimonial,
            AdStyle::Benefit,
            AdStyle::Pinterest,
            AdStyle::Celebrity,
            AdStyle::BeforeAfter,
        ] {
            assert_eq!(entry(style).technical_spec, DEFAULT_TECHNICAL_SPEC);
        }
        assert!(entry(AdStyle::Ugc).technical_spec.contains("iPhone 15 Pro Max"));
        assert!(entry(AdStyle::Ecommerce).technical_spec.contains("Canon R5"));
    }

    #[test]
    fn test_variations_are_distinct_and_non_empty() {
        let config = AdConfiguration::new();
        for entry in CATALOG.iter().chain(std::iter::once(&GENERIC)) {
            let texts: Vec<String> = Variation::ALL
                .iter()
                .map(|v| entry.variation_text(*v, &config))
                .collect();
            for text in &texts {
                assert!(text.starts_with("CONCEPT: "), "{:?}: {text}", entry.style);
            }
            assert_ne!(texts[0], texts[1]);
            assert_ne!(texts[1], texts[2]);
            assert_ne!(texts[0], texts[2]);
        }
    }

    #[test]
    fn test_lookup_falls_back_to_generic() {
        let generic = lookup("Vaporwave Dreams");
        assert!(generic.is_generic());
        assert_eq!(generic.technical_spec, DEFAULT_TECHNICAL_SPEC);
        let config = AdConfiguration::new();
        assert!(generic
            .variation_text(Variation::First, &config)
            .contains("Hero Shot"));
        assert!(generic
            .variation_text(Variation::Second, &config)
            .contains("Creative Angle"));
        assert!(generic
            .variation_text(Variation::Third, &config)
            .contains("Detail/Context"));

        assert_eq!(lookup("studio").style, Some(AdStyle::Studio));
    }

    #[test]
    fn test_ecommerce_price_and_offer() {
        let ecommerce = entry(AdStyle::Ecommerce);
        let bare = ecommerce.variation_text(Variation::First, &AdConfiguration::new());
        assert!(!bare.contains("ADDITIONAL ELEMENT"));
        assert!(!bare.contains('$'));

        let config = AdConfiguration::new()
            .with_price("29.99")
            .with_offer_details("Buy 1 Get 1 Free");
        let text = ecommerce.variation_text(Variation::First, &config);
        assert!(text.contains("price tag showing \"$29.99\""));
        assert!(text.contains("indicating \"Buy 1 Get 1 Free\""));

        // only the hero variation carries the extras
        let second = ecommerce.variation_text(Variation::Second, &config);
        assert!(!second.contains("29.99"));
    }

    #[test]
    fn test_benefit_default_and_custom() {
        let benefit = entry(AdStyle::Benefit);
        let text = benefit.variation_text(Variation::First, &AdConfiguration::new());
        assert!(text.contains("\"Improved Quality of Life\""));

        let config = AdConfiguration::new().with_benefit_text("Deeper sleep");
        for variation in Variation::ALL {
            let text = benefit.variation_text(variation, &config);
            assert!(text.contains("\"Deeper sleep\""));
            assert!(!text.contains(DEFAULT_BENEFIT));
        }
    }

    #[test]
    fn test_celebrity_default_and_custom() {
        let celebrity = entry(AdStyle::Celebrity);
        let text = celebrity.variation_text(Variation::Third, &AdConfiguration::new());
        assert!(text.ends_with("endorsed by A Hollywood Star."));

        let config = AdConfiguration::new().with_celebrity_name("Zendaya");
        let text = celebrity.variation_text(Variation::Second, &config);
        assert!(text.ends_with("a photoshoot for Zendaya."));
    }

    #[test]
    fn test_no_unfilled_placeholders() {
        let config = AdConfiguration::new();
        for entry in CATALOG.iter() {
            for variation in Variation::ALL {
                let text = entry.variation_text(variation, &config);
                assert!(!text.contains("${"), "{:?}", entry.style);
                assert!(!text.contains("undefined"), "{:?}", entry.style);
                assert!(!text.contains("\"\""), "{:?}", entry.style);
            }
        }
    }
}
