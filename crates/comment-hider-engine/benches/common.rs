// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_python_source(size: usize) -> String {
    let base = "#!/usr/bin/env python3\n\"\"\"Module doc.\"\"\"\n\nimport os\n\n# Settings\nNAME = '''value'''\nGREETING = f\"\"\"Hi {NAME}\"\"\"\n\n\nclass Widget:\n    \"\"\"A widget.\n\n    # not a comment\n    \"\"\"\n\n    def render(self, label=\"w\"):\n        '''Render it.'''\n        # build\n        return [label, \"x\", 'y']\n\n";
    base.repeat(size)
}
