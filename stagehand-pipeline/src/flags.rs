//! Argument composition for the primary compiler invocation.
//!
//! Composition only ever adds arguments: extension flags are appended after
//! the caller's arguments, unmatched default flags are prepended, and the
//! implicit `build` subcommand is prepended last when the caller did not
//! name one.

/// Subcommands the primary compiler understands as a first argument.
pub const SUBCOMMANDS: &[&str] = &[
    "build", "clean", "doc", "env", "bug", "fix", "fmt", "generate", "get", "install", "list",
    "mod", "run", "test", "tool", "version", "vet",
];

/// Subcommand prepended when the arguments do not start with one.
pub const DEFAULT_SUBCOMMAND: &str = "build";

/// Extension tokens and the flag each one injects.
pub const EXTENSIONS: &[(&str, &str)] = &[
    ("custom-import", "-gcflags=all=-importmap=oldpkg=newpkg"),
    ("enhanced-generics", "-tags=enhancedgenerics"),
    ("code-contracts", "-tags=contracts"),
];

/// Flag injected for an extension token, if the token is known.
pub fn extension_flag(token: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, flag)| *flag)
}

/// Build the final argument list for the primary compiler.
///
/// Unknown extension tokens are ignored. Each default flag is prepended
/// unless an argument with the same name (the part before the first `=`)
/// is already present; with several unmatched defaults the last one
/// configured ends up first.
pub fn compose(input: &[String], default_flags: &[String], extensions: &[String]) -> Vec<String> {
    let mut args = input.to_vec();

    args.extend(
        extensions
            .iter()
            .filter_map(|token| extension_flag(token))
            .map(str::to_string),
    );

    for flag in default_flags {
        if !has_flag(&args, flag) {
            args.insert(0, flag.clone());
        }
    }

    if !is_subcommand(args.first().map(String::as_str)) {
        args.insert(0, DEFAULT_SUBCOMMAND.to_string());
    }

    args
}

/// Whether `args` already carries `flag`, comparing names before `=`.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    let name = flag_name(flag);
    args.iter().any(|arg| flag_name(arg) == name)
}

/// Whether `arg` is one of the recognized [`SUBCOMMANDS`].
pub fn is_subcommand(arg: Option<&str>) -> bool {
    arg.is_some_and(|arg| SUBCOMMANDS.contains(&arg))
}

fn flag_name(flag: &str) -> &str {
    flag.split_once('=').map_or(flag, |(name, _)| name)
}
