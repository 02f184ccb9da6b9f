use std::path::PathBuf;
use std::sync::Arc;

use hearth::prelude::*;

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

const TRANSLATIONS: &str = r#"{
    "en": {
        "app": { "title": "Hearth console" },
        "auth": {
            "welcome": "Welcome back, {{name}}!",
            "signed_out": "You are signed out.",
            "failed": "Sign-in failed: {{reason}}"
        },
        "home": { "greeting": "Hello {{name}}, you have {{count}} new messages." }
    },
    "es": {
        "app": { "title": "Consola Hearth" },
        "auth": {
            "welcome": "¡Bienvenido de nuevo, {{name}}!",
            "signed_out": "Has cerrado sesión."
        },
        "home": { "greeting": "Hola {{name}}, tienes {{count}} mensajes nuevos." }
    }
}"#;

// ---------------------------------------------------------------------------
// Wiring
// ---------------------------------------------------------------------------

type Context = AppContext<Arc<LocalAuthClient>, FileTokenStore>;

fn token_file() -> PathBuf {
    std::env::var_os("HEARTH_TOKEN_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("hearth-console").join("session.json"))
}

/// One "app launch": fresh context, same backend, same token file.
async fn launch(
    backend: &Arc<LocalAuthClient>,
    catalog: &Arc<TranslationCatalog>,
) -> Result<Context, HearthError> {
    let path = token_file();
    let store = FileTokenStore::open(&path).map_err(|source| HearthError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %store.path().display(), "token store opened");
    let ctx = AppContextBuilder::new()
        .catalog(catalog.clone())
        .build(backend.clone(), store);
    ctx.restore_session().await;
    tracing::info!(
        authenticated = ctx.snapshot().is_authenticated,
        "app launched"
    );
    Ok(ctx)
}

fn show(ctx: &Context) {
    let snapshot = ctx.snapshot();
    match snapshot.user {
        Some(user) => println!("  {}", ctx.resolve_with("auth.welcome", [("name", user.name)])),
        None => println!("  {}", ctx.resolve("auth.signed_out")),
    }
}

#[tokio::main]
async fn main() -> Result<(), HearthError> {
    hearth::telemetry::init_tracing("hearth=debug,info");

    let catalog = Arc::new(TranslationCatalog::from_json_str(TRANSLATIONS)?);
    let backend = Arc::new(LocalAuthClient::new());

    println!("== first launch ({})", token_file().display());
    let ctx = launch(&backend, &catalog).await?;
    println!("  {}", ctx.resolve("app.title"));
    show(&ctx);

    let outcome = ctx.signup("Sam", "5550100", "sam@example.com", "hunter2").await;
    if let Some(reason) = outcome.message() {
        println!("  {}", ctx.resolve_with("auth.failed", [("reason", reason)]));
    }
    show(&ctx);

    // Every catalog language, plus one with no table to show the fallback.
    let mut languages: Vec<String> = ctx
        .text_resolver()
        .catalog()
        .languages()
        .into_iter()
        .map(str::to_owned)
        .collect();
    languages.push("fr".to_owned());

    for language in &languages {
        ctx.set_language(language.as_str());
        println!(
            "  [{language}] {}",
            ctx.resolve_with("home.greeting", [("name", "Sam"), ("count", "3")])
        );
    }

    println!("== relaunch");
    let ctx = launch(&backend, &catalog).await?;
    show(&ctx);

    let outcome = ctx.login("sam@example.com", "wrong").await;
    if let Some(reason) = outcome.message() {
        println!("  {}", ctx.resolve_with("auth.failed", [("reason", reason)]));
    }

    ctx.logout().await;
    show(&ctx);

    println!("== relaunch after logout");
    let ctx = launch(&backend, &catalog).await?;
    show(&ctx);

    Ok(())
}
