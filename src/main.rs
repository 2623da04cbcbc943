//! Instagram Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use instagram_downloader::{
    api::InstagramApi,
    cli::Args,
    config::{parse_selection, parse_shortcode, validate_config, Config, DownloadMode},
    download::{download_full, download_selected, DownloadOptions, DownloadOutcome, Session},
    error::{exit_codes, Error, Result},
    fs::{sanitize_prefix, write_output_file},
    media::{fetch_preview, Preview},
    output::{
        create_item_bar, create_spinner, print_banner, print_error, print_info, print_media_list,
        print_outcome, print_preview_line, print_run_summary, print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            let code = match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::TomlParse(_)
                | Error::InvalidSelection { .. }
                | Error::InvalidFilename(_) => exit_codes::CONFIG_ERROR,
                Error::Resolution(_) | Error::UrlParse(_) => exit_codes::RESOLUTION_ERROR,
                Error::Fetch { .. } | Error::EmptyBundle | Error::Archive(_) | Error::Http(_) => {
                    exit_codes::DOWNLOAD_ERROR
                }
                _ => exit_codes::UNEXPECTED_ERROR,
            };
            ExitCode::from(code as u8)
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}, using defaults",
            config_path.display()
        );
        Config::default()
    };

    let post_url = args.merge_into_config(&mut config);
    validate_config(&config)?;

    let shortcode = parse_shortcode(&post_url)?;

    print_run_summary(
        &shortcode,
        &config.options.download_mode.to_string(),
        &config.download_directory().display().to_string(),
    );

    let api = InstagramApi::new(&config.api)?;

    let spinner = create_spinner(&format!("Looking up post {}...", shortcode));
    let resolved = api.resolve(&shortcode).await;
    spinner.finish_and_clear();

    let session = Session::new().load(post_url, resolved?);
    print_media_list(session.media());

    match config.options.download_mode {
        DownloadMode::Preview => {
            show_previews(&api, &config, &session).await?;
            Ok(exit_codes::SUCCESS)
        }
        DownloadMode::Full | DownloadMode::Selective => {
            download_post(&api, &config, session).await
        }
    }
}

/// Load the preview of every item and optionally save it.
async fn show_previews(api: &InstagramApi, config: &Config, session: &Session) -> Result<()> {
    println!();
    print_info("Loading previews...");

    for item in session.media().iter() {
        let preview = fetch_preview(api, item).await;
        print_preview_line(item.index, &preview);

        if !config.options.save_previews {
            continue;
        }
        if let Preview::Image { bytes, .. } = &preview {
            let prefix = sanitize_prefix(&config.options.file_prefix)?;
            let name = format!("{}_{}_preview.jpg", prefix, item.index);
            let path = write_output_file(config, &name, bytes)?;
            print_info(&format!("Saved preview to {}", path.display()));
        }
    }

    Ok(())
}

/// Run a full or selective download and write the archive.
async fn download_post(api: &InstagramApi, config: &Config, session: Session) -> Result<i32> {
    let selective = config.options.download_mode == DownloadMode::Selective;

    let session = if selective {
        let request = parse_selection(config.options.selection.as_deref().unwrap_or_default())?;
        session.apply_selection(&request)?
    } else {
        session
    };

    let total = if selective {
        session.selection().len()
    } else {
        session.media().len()
    };

    let prefix = sanitize_prefix(&config.options.file_prefix)?;
    let bar = create_item_bar(total as u64, "Downloading", config.options.show_downloads);
    let options = DownloadOptions {
        concurrency: config.options.concurrency,
        progress: Some(&bar),
        ..DownloadOptions::new(&prefix)
    };

    let outcome = if selective {
        download_selected(api, session.media(), session.selection(), &options).await?
    } else {
        download_full(api, session.media(), &options).await?
    };
    bar.finish_and_clear();

    print_outcome(&outcome);

    let partial = matches!(outcome, DownloadOutcome::Partial { .. });

    let archive = outcome.into_result()?;
    let path = write_output_file(config, &archive.file_name, &archive.data)?;
    let session = session.mark_completed();

    println!();
    print_success(&format!(
        "Saved {} item(s) to {} ({})",
        archive.entries.len(),
        path.display(),
        archive.mime_type()
    ));
    tracing::debug!(
        url = session.post_url(),
        completed = session.is_completed(),
        "Session finished"
    );

    if partial {
        print_warning("Some items could not be downloaded; the archive is incomplete");
        Ok(exit_codes::PARTIAL_DOWNLOAD)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
