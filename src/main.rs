//! Placement readiness: score a student's placement chances from profile, resume and job description

use clap::Parser;
use log::{error, info};
use placement_readiness::catalog::roles::{Role, ROLE_DIFFICULTY};
use placement_readiness::cli::{self, AnalyzeArgs, Cli, Commands, ConfigAction, ModelAction, OutputArgs};
use placement_readiness::config::Config;
use placement_readiness::error::{PlacementError, Result};
use placement_readiness::input::{DocumentKind, InputManager, TextSource};
use placement_readiness::model::classifier::{LogisticClassifier, PlacementClassifier};
use placement_readiness::output::formatter::{save_report_to_file, suggest_filename};
use placement_readiness::output::{ListLimits, PlacementReport, ReportGenerator, ReportMetadata};
use placement_readiness::processing::analyzer::{AnalysisEngine, AnalysisRequest};
use placement_readiness::processing::profile::Profile;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Scoring commands cannot run without a classifier, so load it up front.
    let engine = if matches!(cli.command, Commands::Analyze(_) | Commands::Demo { .. }) {
        let model_path = config.classifier_path(cli.model.as_deref());
        match LogisticClassifier::load_or_bundled(model_path.as_deref()) {
            Ok(classifier) => Some(AnalysisEngine::new(Arc::new(classifier))),
            Err(e) => {
                error!("Failed to load classifier: {}", e);
                process::exit(1);
            }
        }
    } else {
        None
    };

    let context = RunContext {
        config,
        config_path,
        model_override: cli.model,
        engine,
    };

    if let Err(e) = run_command(cli.command, &context).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

struct RunContext {
    config: Config,
    config_path: PathBuf,
    model_override: Option<PathBuf>,
    engine: Option<AnalysisEngine>,
}

impl RunContext {
    fn engine(&self) -> Result<&AnalysisEngine> {
        self.engine
            .as_ref()
            .ok_or_else(|| PlacementError::ModelLoading("Classifier not loaded".to_string()))
    }
}

async fn run_command(command: Commands, ctx: &RunContext) -> Result<()> {
    match command {
        Commands::Analyze(args) => run_analyze(args, ctx).await,

        Commands::Demo { candidate, output } => {
            info!("Running demo candidate: {}", candidate);
            let demo = candidate.load();
            let request = AnalysisRequest {
                profile: demo.profile,
                resume_text: demo.resume.to_string(),
                job_text: Some(demo.job_description.to_string()),
            };
            let sources = (format!("demo {} resume", candidate), format!("demo {} job", candidate));
            score_and_render(ctx, &request, sources, &output)
        }

        Commands::Roles => {
            println!("Target roles\n");
            println!("  {:<28} {:>10}  {}", "Role", "Difficulty", "Canned JD");
            for role in Role::ALL {
                println!(
                    "  {:<28} {:>10.2}  {}",
                    role.as_str(),
                    ROLE_DIFFICULTY.get(role),
                    if role.description().is_some() { "yes" } else { "no" }
                );
            }
            println!("\nUse the role name or its slug, e.g. --role {}", Role::MlEngineer.slug());
            Ok(())
        }

        Commands::Model { action } => match action {
            ModelAction::Info => {
                let path = ctx.config.classifier_path(ctx.model_override.as_deref());
                let classifier = LogisticClassifier::load_or_bundled(path.as_deref())?;
                println!("Classifier: {}", classifier.describe());
                match &path {
                    Some(path) => println!("Location: {}", path.display()),
                    None => println!("Location: bundled with the binary"),
                }
                println!("Intercept: {:.4}", classifier.intercept());
                let artifact = classifier.to_artifact();
                for (name, weight) in artifact.feature_names.iter().zip(artifact.coefficients.iter()) {
                    println!("  {:<18} {:>9.4}", name, weight);
                }
                Ok(())
            }

            ModelAction::Install { path, force } => {
                // Only valid artifacts are installed.
                let classifier = LogisticClassifier::load(&path)?;
                let target = ctx.config.installed_classifier_path();

                if target.exists() && !force {
                    println!("Classifier already installed at {}", target.display());
                    println!("Use --force to overwrite");
                    return Ok(());
                }

                ctx.config.ensure_models_dir()?;
                tokio::fs::copy(&path, &target).await?;
                println!("Installed {} to {}", classifier.describe(), target.display());
                Ok(())
            }
        },

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&ctx.config).map_err(|e| {
                        PlacementError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("Configuration ({})\n", ctx.config_path.display());
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&ctx.config_path)?;
                    println!("Configuration reset: {}", ctx.config_path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", ctx.config_path.display());
                }
            }
            Ok(())
        }
    }
}

async fn run_analyze(args: AnalyzeArgs, ctx: &RunContext) -> Result<()> {
    info!("Starting placement readiness analysis");

    if let Some(resume) = &args.resume {
        cli::validate_file_extension(resume, &["pdf", "txt", "md"])
            .map_err(|e| PlacementError::InvalidInput(format!("Resume file: {}", e)))?;
    }
    if let Some(job) = &args.job {
        cli::validate_file_extension(job, &["txt", "md"])
            .map_err(|e| PlacementError::InvalidInput(format!("Job description file: {}", e)))?;
    }

    let profile = Profile {
        academic_score: args.academic,
        has_internship: args.internship,
        project_count: args.projects,
        communication: args.communication,
        coding_score: args.coding,
        hackathon_count: args.hackathons,
        role: args.role,
    };

    let resume_source = TextSource::from_options(args.resume, args.resume_text).ok_or_else(|| {
        PlacementError::MissingInput("Provide a resume with --resume or --resume-text".to_string())
    })?;
    let job_source = TextSource::from_options(args.job, args.job_text);

    let mut input_manager = InputManager::new();
    let resume_text = input_manager.read(&resume_source, DocumentKind::Resume).await?;
    let job_text = match &job_source {
        Some(source) => Some(input_manager.read(source, DocumentKind::JobDescription).await?),
        None => None,
    };

    let sources = (
        describe_source(Some(&resume_source), profile.role),
        describe_source(job_source.as_ref(), profile.role),
    );
    let request = AnalysisRequest {
        profile,
        resume_text,
        job_text,
    };

    score_and_render(ctx, &request, sources, &args.output)
}

fn describe_source(source: Option<&TextSource>, role: Role) -> String {
    match source {
        Some(TextSource::File(path)) => path.display().to_string(),
        Some(TextSource::Inline(_)) => "pasted text".to_string(),
        None => format!("{} description", role),
    }
}

fn score_and_render(
    ctx: &RunContext,
    request: &AnalysisRequest,
    (resume_source, job_source): (String, String),
    output: &OutputArgs,
) -> Result<()> {
    let engine = ctx.engine()?;
    let result = engine.analyze(request)?;

    let format = match &output.output {
        Some(format) => cli::parse_output_format(format).map_err(PlacementError::InvalidInput)?,
        None => ctx.config.output.format,
    };
    let detailed = output.detailed || ctx.config.output.detailed;
    let limits = ListLimits {
        keywords: ctx.config.output.max_listed_keywords,
        skills: ctx.config.output.max_listed_skills,
    };

    let suggested_name = suggest_filename(&format, &resume_source, true);
    let metadata = ReportMetadata::new(resume_source, job_source, engine.classifier_description());
    let report = PlacementReport::new(result, metadata);

    // Files never get ANSI escapes.
    let use_colors = ctx.config.output.color_output && output.save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed, true, true, limits);
    let content = generator.generate_report(&report, &format)?;

    match &output.save {
        Some(path) => {
            let target = if path.is_dir() {
                path.join(suggested_name)
            } else {
                path.clone()
            };
            save_report_to_file(&content, &target)?;
            println!("Report saved to {}", display_path(&target));
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
