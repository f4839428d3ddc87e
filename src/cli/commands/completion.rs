use crate::cli::parser::{Cli, CompletionArgs};
use crate::utils::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

pub fn execute(args: CompletionArgs) -> Result<()> {
    let mut stdout = std::io::stdout();
    write_completion(args.shell, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

pub fn write_completion(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completion_mentions_subcommands() {
        let mut buffer = Vec::new();
        write_completion(Shell::Bash, &mut buffer).unwrap();
        let script = String::from_utf8(buffer).unwrap();

        assert!(script.contains("branch-sweep"));
        assert!(script.contains("prune"));
        assert!(script.contains("scan"));
    }
}
