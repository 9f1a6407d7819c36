use serde::Serialize;
use tracing::debug;

use crate::cli::{ConfigCommand, GetArgs, SetArgs};
use crate::config::SettingKey;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct ConfigEntry<'a> {
    key: &'a str,
    value: &'a str,
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    debug!(
        profile = ctx.profile.as_deref().unwrap_or("(none)"),
        path = %ctx.store.path().display(),
        "resolved config file"
    );

    match command {
        ConfigCommand::Set(args) => set(ctx, args),
        ConfigCommand::Get(args) => get(ctx, args),
        ConfigCommand::List => list(ctx),
        ConfigCommand::Reset => reset(ctx),
    }
}

fn set(ctx: &AppContext, args: SetArgs) -> AppResult<()> {
    ctx.store.set(&args.key, &args.value)?;

    let text = format!("Config '{}' set to '{}'", args.key, args.value);
    ctx.output.emit(
        &text,
        &ConfigEntry {
            key: &args.key,
            value: &args.value,
        },
    )
}

fn get(ctx: &AppContext, args: GetArgs) -> AppResult<()> {
    let value = ctx.store.get(&args.key)?;
    ctx.output.emit(
        &value,
        &ConfigEntry {
            key: &args.key,
            value: &value,
        },
    )
}

fn list(ctx: &AppContext) -> AppResult<()> {
    let entries = ctx.store.list()?;
    let text = format_entries(&entries);
    let json = entries
        .iter()
        .map(|(key, value)| ConfigEntry {
            key: key.json_key(),
            value,
        })
        .collect::<Vec<_>>();
    ctx.output.emit(&text, &json)
}

fn reset(ctx: &AppContext) -> AppResult<()> {
    let settings = ctx.store.reset()?;
    ctx.output.emit("Configuration reset to default values.", &settings)
}

fn format_entries(entries: &[(SettingKey, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{}: {}", key.field_name(), value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_entries_by_field_name() {
        let entries = vec![
            (SettingKey::LogLevel, "info".to_string()),
            (SettingKey::Progress, "plain".to_string()),
            (SettingKey::ConfigDir, String::new()),
        ];
        assert_eq!(
            format_entries(&entries),
            "LogLevel: info\nProgress: plain\nConfigDir: "
        );
    }
}
