//! CLI for AdGenius - AI product ad generation.

use adgenius::catalog::{self, StyleEntry};
use adgenius::{
    can_proceed, prompt, AdConfiguration, AdGenerator, AdStyle, AspectRatio, CredentialProvider,
    EnvCredentials, GateDecision, GeminiProvider, GenerationOutcome, ImageData, ModelType,
    Variation,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "adgenius")]
#[command(about = "Generate product ad images with Gemini")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate three ad variations for a product photo
    Generate(GenerateArgs),

    /// Print the composed prompts without calling the API
    Prompt(PromptArgs),

    /// List available ad styles
    Styles,
}

/// Optional copy fields shared by `generate` and `prompt`.
#[derive(Args)]
struct FieldArgs {
    /// Price shown on a price tag (Ecommerce)
    #[arg(long)]
    price: Option<String>,

    /// Offer text, e.g. "Buy 1 Get 1 Free" (Ecommerce)
    #[arg(long)]
    offer: Option<String>,

    /// Main benefit to visualize (Benefit)
    #[arg(long)]
    benefit: Option<String>,

    /// Celebrity whose style is implied (Celebrity)
    #[arg(long)]
    celebrity: Option<String>,

    /// Free-text request added to every prompt
    #[arg(long)]
    context: Option<String>,
}

impl FieldArgs {
    fn apply(self, mut config: AdConfiguration) -> AdConfiguration {
        if let Some(price) = self.price {
            config = config.with_price(price);
        }
        if let Some(offer) = self.offer {
            config = config.with_offer_details(offer);
        }
        if let Some(benefit) = self.benefit {
            config = config.with_benefit_text(benefit);
        }
        if let Some(celebrity) = self.celebrity {
            config = config.with_celebrity_name(celebrity);
        }
        if let Some(context) = self.context {
            config = config.with_custom_context(context);
        }
        config
    }
}

#[derive(Args)]
struct GenerateArgs {
    /// Product photo
    product: PathBuf,

    /// Style reference image
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Ad style, by name or slug (see `adgenius styles`)
    #[arg(short, long)]
    style: Option<String>,

    /// Aspect ratio (1:1, 9:16, 16:9, 4:3, 3:4)
    #[arg(short, long)]
    aspect_ratio: Option<String>,

    /// Image model
    #[arg(short, long, value_enum)]
    model: Option<ModelArg>,

    #[command(flatten)]
    fields: FieldArgs,

    /// JSON ad configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

#[derive(Args)]
struct PromptArgs {
    /// Ad style; unknown names use the generic variations
    #[arg(short, long)]
    style: Option<String>,

    /// Only print this variation (1-3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    variation: Option<u8>,

    /// Compose as if a style reference image were supplied
    #[arg(long)]
    with_reference: bool,

    #[command(flatten)]
    fields: FieldArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    /// Gemini 2.5 Flash Image
    Flash,
    /// Gemini 3 Pro Image (needs a paid key)
    Pro,
}

impl From<ModelArg> for ModelType {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Flash => ModelType::Flash,
            ModelArg::Pro => ModelType::Pro,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => generate(args, cli.json).await?,
        Commands::Prompt(args) => print_prompts(args, cli.json)?,
        Commands::Styles => list_styles(cli.json)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "adgenius=debug" } else { "adgenius=info" };
    let filter = std::env::var("ADGENIUS_LOG")
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| default.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AdConfiguration> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(AdConfiguration::new()),
    }
}

async fn generate(args: GenerateArgs, json_output: bool) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(style) = &args.style {
        config = config.with_style(style.parse()?);
    }
    if let Some(ratio) = &args.aspect_ratio {
        config = config.with_aspect_ratio(ratio.parse::<AspectRatio>()?);
    }
    if let Some(model) = args.model {
        config = config.with_model(model.into());
    }
    if let Some(reference) = &args.reference {
        config = config.with_reference_image(ImageData::from_path(reference)?.to_data_url());
    }
    let config = args.fields.apply(config);

    for field in config.ignored_fields() {
        tracing::warn!(
            field = field.label(),
            style = %config.style,
            "field is ignored by the selected style"
        );
    }

    let credentials = EnvCredentials;
    if can_proceed(config.model, credentials.has_selected_key()) == GateDecision::NeedsCredential {
        anyhow::bail!(
            "{} requires a paid API key. Set GEMINI_API_KEY and try again.",
            config.model.display_name()
        );
    }

    let product = ImageData::from_path(&args.product)?;
    let provider = GeminiProvider::builder().credentials(credentials).build()?;
    let generator = AdGenerator::new(provider, credentials);

    let result = generator.generate_images(product, &config).await;
    let outcome = GenerationOutcome::from_result(result);
    if let Some(message) = outcome.user_message(config.model) {
        if outcome.needs_credential_prompt() {
            tracing::error!("set GEMINI_API_KEY (or GOOGLE_API_KEY) to a valid key");
        }
        anyhow::bail!(message);
    }

    std::fs::create_dir_all(&args.output)?;
    let mut saved = Vec::new();
    for image in outcome.into_images() {
        let path = args.output.join(image.default_file_name());
        image.save(&path)?;
        saved.push((path, image));
    }

    if json_output {
        let images: Vec<_> = saved
            .iter()
            .map(|(path, image)| {
                serde_json::json!({
                    "variation": image.variation.number(),
                    "output": path.display().to_string(),
                    "size_bytes": image.size(),
                    "format": image.format.extension(),
                    "duration_ms": image.duration_ms,
                })
            })
            .collect();
        let result = serde_json::json!({
            "success": true,
            "style": config.style.as_str(),
            "aspect_ratio": config.aspect_ratio.as_str(),
            "model": config.model.as_str(),
            "images": images,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "Generated {} of 3 variations ({}, {}, {})",
            saved.len(),
            config.style,
            config.aspect_ratio,
            config.model.display_name()
        );
        for (path, image) in &saved {
            println!("  {} ({} bytes)", path.display(), image.size());
        }
    }

    Ok(())
}

fn print_prompts(args: PromptArgs, json_output: bool) -> anyhow::Result<()> {
    let entry: &StyleEntry = match &args.style {
        Some(tag) => {
            let entry = catalog::lookup(tag);
            if entry.is_generic() {
                tracing::warn!(style = %tag, "unknown style, using generic variations");
            }
            entry
        }
        None => catalog::entry(AdStyle::default()),
    };

    let mut config = AdConfiguration::new();
    if let Some(style) = entry.style {
        config = config.with_style(style);
    }
    let config = args.fields.apply(config);

    let variations: Vec<Variation> = match args.variation {
        Some(n) => vec![Variation::try_from(usize::from(n) - 1)?],
        None => Variation::ALL.to_vec(),
    };

    let prompts: Vec<(Variation, String)> = variations
        .into_iter()
        .map(|v| {
            (
                v,
                prompt::compose_entry(entry, v, &config, args.with_reference),
            )
        })
        .collect();

    if json_output {
        let result: Vec<_> = prompts
            .iter()
            .map(|(v, text)| {
                serde_json::json!({
                    "style": entry.style.map(|s| s.as_str()),
                    "variation": v.number(),
                    "prompt": text,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for (v, text) in &prompts {
            println!("===== Variation {} =====", v.number());
            println!("{}\n", text);
        }
    }

    Ok(())
}

fn list_styles(json_output: bool) -> anyhow::Result<()> {
    #[derive(serde::Serialize)]
    struct StyleInfo {
        name: &'static str,
        slug: &'static str,
        technical_spec: &'static str,
        fields: Vec<&'static str>,
    }

    let styles: Vec<StyleInfo> = AdStyle::ALL
        .iter()
        .map(|style| StyleInfo {
            name: style.as_str(),
            slug: style.slug(),
            technical_spec: catalog::entry(*style).technical_spec,
            fields: style.accepted_fields().iter().map(|f| f.label()).collect(),
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&styles)?);
    } else {
        println!("Available styles:\n");
        for s in &styles {
            println!("  {} ({})", s.name, s.slug);
            println!("    {}", s.technical_spec);
            if !s.fields.is_empty() {
                println!("    fields: {}", s.fields.join(", "));
            }
        }
    }

    Ok(())
}
