use crate::api::{build_router, AppState};
use crate::config::cli::{AdminArgs, AdminCommand, DeveloperFields, GameFields, ServeArgs};
use crate::config::Config;
use crate::domain::messages::UpdateResponse;
use crate::domain::{DocumentStore, Developer, Game};
use crate::error::{Result, SiteError};
use crate::infrastructure::{AdminApiClient, CheckoutStore, FileSystemCache, GithubStore};
use crate::services::admin::export_file_name;
use crate::services::session::{AdminSession, DataSource};
use crate::services::site::SiteService;
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub async fn serve(config: &Config, args: &ServeArgs) -> Result<()> {
    let store: Arc<dyn DocumentStore> = match &args.checkout_dir {
        Some(dir) => {
            info!("Serving pages from checkout {:?}", dir);
            Arc::new(CheckoutStore::new(dir))
        }
        None => {
            let (Some(token), Some(repo)) = (&args.github_token, &args.github_repo) else {
                return Err(SiteError::Other(
                    "GITHUB_TOKEN and GITHUB_REPO are required without --checkout-dir".to_string(),
                ));
            };
            info!("Serving pages from {} ({})", repo, args.github_branch);
            Arc::new(GithubStore::with_api_url(
                config.http_client.clone(),
                args.github_api_url.as_str(),
                token.clone(),
                repo.clone(),
                args.github_branch.clone(),
            ))
        }
    };

    let site = SiteService::new(store, config.layout.clone());
    let app = build_router(AppState::new(site, args.api_key.as_str()));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| SiteError::Other(format!("Invalid listen address: {}", err)))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", err);
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<GameFields> for Game {
    fn from(fields: GameFields) -> Self {
        Game {
            name: fields.name,
            thumbnail: fields.thumbnail,
            description: fields.description,
            status: fields.status.into(),
            game_id: fields.game_id,
            features: split_list(&fields.features),
        }
    }
}

impl From<DeveloperFields> for Developer {
    fn from(fields: DeveloperFields) -> Self {
        Developer {
            name: fields.name,
            role: fields.role,
            avatar: fields.avatar,
            description: fields.description,
            skills: split_list(&fields.skills),
        }
    }
}

fn report(responses: &[UpdateResponse]) {
    for response in responses {
        println!("{}", response.message);
        if !response.unanchored_sections.is_empty() {
            println!(
                "  warning: sections not found, left unchanged: {}",
                response.unanchored_sections.join(", ")
            );
        }
    }
}

pub async fn admin(config: &Config, args: &AdminArgs) -> Result<()> {
    config.ensure_directories()?;
    let cache = Arc::new(FileSystemCache::new(&config.args.cache_dir));
    let api = AdminApiClient::new(
        config.http_client.clone(),
        args.api_url.as_str(),
        args.api_key.clone(),
    );

    // Every command starts from the live site; the cache is only a fallback.
    let (mut session, source) = AdminSession::load(cache, api).await?;
    match source {
        DataSource::Server => info!("Loaded site data from the server"),
        DataSource::Cache => println!("Server unavailable, using cached data"),
        DataSource::Empty => println!("Server unavailable and no cached data"),
    }

    match &args.command {
        AdminCommand::Pull | AdminCommand::Stats => {
            let stats = session.state.stats();
            println!("Games:      {} ({} working)", stats.total_games, stats.working_games);
            println!("Videos:     {}", stats.total_videos);
            println!("Developers: {}", stats.total_developers);
            return Ok(());
        }
        AdminCommand::AddGame(fields) => {
            let key = session.state.add_game(fields.clone().into());
            println!("Added game {}", key);
        }
        AdminCommand::EditGame { key, fields } => {
            session.state.edit_game(key, fields.clone().into())?
        }
        AdminCommand::RemoveGame { key } => {
            let game = session.state.delete_game(key)?;
            println!("Removed game {}", game.name);
        }
        AdminCommand::AddVideo { url, description } => {
            let video = session
                .state
                .add_video(url, description.as_deref(), Utc::now())?;
            println!("Added video {}", video.id);
        }
        AdminCommand::RemoveVideo { index } => {
            let video = session.state.delete_video(*index)?;
            println!("Removed video {}", video.title);
        }
        AdminCommand::AddDeveloper(fields) => {
            let key = session.state.add_developer(fields.clone().into());
            println!("Added developer {}", key);
        }
        AdminCommand::EditDeveloper { key, fields } => {
            session.state.edit_developer(key, fields.clone().into())?
        }
        AdminCommand::RemoveDeveloper { key } => {
            let developer = session.state.delete_developer(key)?;
            println!("Removed developer {}", developer.name);
        }
        AdminCommand::Feature {
            games,
            videos,
            developers,
        } => {
            let payload = session.state.select_featured(games, videos, developers);
            report(&[session.push_featured(&payload).await?]);
            return Ok(());
        }
        AdminCommand::SyncHomepage => {
            report(&[session.sync_homepage().await?]);
            return Ok(());
        }
        AdminCommand::SetIcon { url } => {
            let response = session.set_icon(url).await?;
            println!("{}", response.message);
            for file in response.updated_files {
                println!("  {}", file);
            }
            return Ok(());
        }
        AdminCommand::Export { output } => {
            let path = output
                .clone()
                .unwrap_or_else(|| export_file_name(Utc::now()).into());
            std::fs::write(&path, session.state.export()?)?;
            println!("Data exported to {:?}", path);
            return Ok(());
        }
        AdminCommand::Import { file } => {
            session.state.import_json(&std::fs::read_to_string(file)?)?;
        }
        AdminCommand::Reset { yes } => {
            if !*yes {
                return Err(SiteError::MalformedInput(
                    "Reset deletes all games, videos and developers; pass --yes to confirm".to_string(),
                ));
            }
            session.state.reset();
        }
    }

    report(&session.save_all().await?);
    Ok(())
}
