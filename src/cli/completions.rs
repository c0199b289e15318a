use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rootsync completions bash > ~/.bash_completion.d/rootsync\n\n\
                  Generate zsh completions:\n    rootsync completions zsh > ~/.zfunc/_rootsync")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
