//! Commands that read and write the locale files directly.

use std::fs;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use super::super::args::{
    CopyCommand, GetAllCommand, GetCommand, HasCommand, LocalesCommand, MergeCommand,
    MissingCommand, SetCommand, SetMultipleCommand,
};
use super::helper::CommandContext;
use super::{
    BatchSetOutput, CommandResult, CopyOutput, GetAllOutput, HasOutput, LocalesOutput, MergeOutput,
    MissingOutput, SetOutput, ValueOutput,
};
use crate::core::KeyPath;

/// Command-line values are JSON when they parse as JSON, plain strings
/// otherwise. Quote a value twice to store a literal JSON string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn get(cmd: GetCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let path = KeyPath::parse(&cmd.key)?;

    let result = ctx.store.get(&cmd.locale, &path);
    Ok(CommandResult {
        output: ValueOutput {
            locale: cmd.locale,
            key: cmd.key,
            value: result.value,
        }
        .into(),
        warnings: result.warnings,
    })
}

pub fn has(cmd: HasCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let path = KeyPath::parse(&cmd.key)?;

    let result = ctx.store.has(&cmd.locale, &path);
    Ok(CommandResult {
        output: HasOutput {
            present: result.present,
        }
        .into(),
        warnings: result.warnings,
    })
}

pub fn set(cmd: SetCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let path = KeyPath::parse(&cmd.key)?;

    let result = ctx
        .store
        .set(&cmd.locale, &path, parse_value(&cmd.value), cmd.skip_if_exists)?;
    Ok(CommandResult {
        output: SetOutput {
            locale: cmd.locale,
            key: cmd.key,
            outcome: result.outcome,
        }
        .into(),
        warnings: result.warnings,
    })
}

pub fn set_multiple(cmd: SetMultipleCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let path = KeyPath::parse(&cmd.key)?;

    let mut values = Map::new();
    for pair in &cmd.values {
        let Some((locale, value)) = pair.split_once('=') else {
            bail!("Invalid pair '{}': expected locale=value", pair);
        };
        values.insert(locale.to_string(), parse_value(value));
    }

    let result = ctx.store.set_multiple(&path, &values, cmd.skip_if_exists)?;
    Ok(CommandResult {
        output: BatchSetOutput {
            key: cmd.key,
            outcomes: result.outcomes,
        }
        .into(),
        warnings: result.warnings,
    })
}

pub fn get_all(cmd: GetAllCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let path = KeyPath::parse(&cmd.key)?;

    let result = ctx.store.get_all(&path);
    Ok(CommandResult {
        output: GetAllOutput {
            key: cmd.key,
            values: result.values,
        }
        .into(),
        warnings: result.warnings,
    })
}

pub fn missing(cmd: MissingCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let path = KeyPath::parse(&cmd.key)?;

    let result = ctx.store.get_missing(&path);
    Ok(CommandResult {
        output: MissingOutput {
            key: cmd.key,
            locales: result.locales,
        }
        .into(),
        warnings: result.warnings,
    })
}

pub fn copy(cmd: CopyCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let path = KeyPath::parse(&cmd.key)?;

    let targets = if cmd.to.is_empty() {
        None
    } else {
        Some(cmd.to.as_slice())
    };
    let result = ctx
        .store
        .copy(&cmd.source, &path, targets, cmd.skip_if_exists)?;
    Ok(CommandResult {
        output: CopyOutput {
            source: cmd.source,
            key: cmd.key,
            value: result.value,
            outcomes: result.outcomes,
        }
        .into(),
        warnings: result.warnings,
    })
}

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    let content = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read file: {}", cmd.file.display()))?;
    let entries: Map<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as a JSON object", cmd.file.display()))?;

    let result = ctx.store.merge(&cmd.locale, &entries, cmd.skip_if_exists)?;
    Ok(CommandResult {
        output: MergeOutput {
            locale: cmd.locale,
            outcomes: result.outcomes,
        }
        .into(),
        warnings: result.warnings,
    })
}

pub fn locales(cmd: LocalesCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    let list = ctx.store.list_locales();
    Ok(CommandResult {
        output: LocalesOutput {
            locales: list.locales,
        }
        .into(),
        warnings: list.warnings,
    })
}
