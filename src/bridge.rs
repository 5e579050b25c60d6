use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::commands;
use crate::error::{Error, Result};
use crate::models::TerminalApp;

/// The bridge allow-list.
///
/// These names are the complete call surface reachable from the
/// presentation context; nothing else dispatches. Arguments cross the
/// boundary by value as one JSON object and results return the same way,
/// so no live reference ever leaves the privileged side.
pub const OPERATIONS: &[&str] = &[
    "list",
    "listTree",
    "readText",
    "writeText",
    "createFile",
    "exists",
    "deleteFile",
    "createDirectory",
    "deleteDirectoryRecursive",
    "rename",
    "directoryExists",
    "selectDirectory",
    "getHomePath",
    "launchExternalTool",
];

/// Whether an operation name is on the allow-list.
pub fn is_exported(op: &str) -> bool {
    OPERATIONS.contains(&op)
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirArgs {
    dir_path: String,
}

#[derive(serde::Deserialize)]
struct PathArgs {
    path: String,
}

#[derive(serde::Deserialize)]
struct WriteArgs {
    path: String,
    content: String,
}

#[derive(serde::Deserialize)]
struct CreateFileArgs {
    path: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenameArgs {
    old_path: String,
    new_path: String,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LaunchArgs {
    #[serde(default)]
    path: Option<String>,
    cwd: String,
    #[serde(default, alias = "terminalKind")]
    terminal: TerminalApp,
}

fn parse<T: DeserializeOwned>(op: &str, args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|err| Error::invalid_arguments(op, err))
}

fn respond<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|err| Error::Io(std::io::Error::other(err)))
}

/// Dispatches one bridge call by name.
///
/// The single entry point for the presentation context: the operation
/// name is looked up on the allow-list, the argument object is
/// deserialized by value, and the matching command runs to completion.
/// Unknown names and malformed arguments are errors, never panics.
pub async fn dispatch(op: &str, args: Value) -> Result<Value> {
    match op {
        "list" => {
            let args: DirArgs = parse(op, args)?;
            respond(commands::read_directory(args.dir_path).await?)
        }
        "listTree" => {
            let args: DirArgs = parse(op, args)?;
            respond(commands::read_directory_tree(args.dir_path).await?)
        }
        "readText" => {
            let args: PathArgs = parse(op, args)?;
            respond(commands::read_file(args.path).await?)
        }
        "writeText" => {
            let args: WriteArgs = parse(op, args)?;
            respond(commands::write_file(args.path, args.content).await?)
        }
        "createFile" => {
            let args: CreateFileArgs = parse(op, args)?;
            respond(commands::create_file(args.path, args.content).await?)
        }
        "exists" => {
            let args: PathArgs = parse(op, args)?;
            respond(commands::file_exists(args.path).await)
        }
        "deleteFile" => {
            let args: PathArgs = parse(op, args)?;
            respond(commands::delete_file(args.path).await?)
        }
        "createDirectory" => {
            let args: DirArgs = parse(op, args)?;
            respond(commands::create_directory(args.dir_path).await?)
        }
        "deleteDirectoryRecursive" => {
            let args: DirArgs = parse(op, args)?;
            respond(commands::delete_directory(args.dir_path).await?)
        }
        "rename" => {
            let args: RenameArgs = parse(op, args)?;
            respond(commands::rename_item(args.old_path, args.new_path).await?)
        }
        "directoryExists" => {
            let args: DirArgs = parse(op, args)?;
            respond(commands::directory_exists(args.dir_path).await)
        }
        "selectDirectory" => respond(commands::select_directory().await?),
        "getHomePath" => respond(commands::get_home_path().await?),
        "launchExternalTool" => {
            let args: LaunchArgs = parse(op, args)?;
            respond(commands::launch_external_tool(args.path, args.cwd, args.terminal).await?)
        }
        other => Err(Error::UnknownOperation(other.to_string())),
    }
}
