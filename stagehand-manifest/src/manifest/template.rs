/// Starter configuration written by `stagehand init`.
///
/// Every stage and pass is disabled so the file is safe to drop into any
/// Go module; enable what the project needs.
pub const STARTER_MANIFEST: &str = r#"# Stagehand build configuration

[compiler]
path = "go"
# Injected unless the same flag (up to '=') is already on the command line.
default_flags = ["-trimpath"]
# Known tokens: custom-import, enhanced-generics, code-contracts
extensions = []

[env]
# CGO_ENABLED = "0"

[[passes]]
name = "generate"
phase = "pre"
command = "go"
args = ["generate", "./..."]
enabled = false

[[passes]]
name = "vet"
phase = "post"
command = "go"
args = ["vet", "./..."]
enabled = false

[transpile]
enabled = false
tool = "tsc"
src_dir = "web/ts"
out_dir = "static/js"
options = []

[style]
enabled = false
tool = "sass"
src_dir = "web/scss"
out_dir = "static/css"
options = []
extension = "scss"

[convert]
enabled = false
tool = "php"
src_dirs = ["web/pages"]
options = []
source_extension = "php"
output_extension = "html"

[output]
verbose = false
debug = false
"#;
