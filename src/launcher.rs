//! Spawn a catalog command detached from the launcher.

use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

/// Drop freedesktop field codes: every `%` together with the char after it.
pub fn clean_command(command: &str) -> String {
    let mut cleaned = String::with_capacity(command.len());
    let mut chars = command.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            chars.next();
        } else {
            cleaned.push(c);
        }
    }
    cleaned
}

/// Split a cleaned command into argv. Unbalanced quotes fall back to plain
/// whitespace splitting.
pub fn command_argv(command: &str) -> Vec<String> {
    let cleaned = clean_command(command);
    shlex::split(&cleaned)
        .unwrap_or_else(|| cleaned.split_whitespace().map(str::to_string).collect())
}

/// Start `command` in its own session with null stdio and do not wait.
pub fn spawn_detached(command: &str) -> Result<()> {
    let argv = command_argv(command);
    let Some(program) = argv.first() else {
        bail!("empty command: {command:?}");
    };
    let child = detached_command(&argv)?
        .spawn()
        .with_context(|| format!("failed to launch {program}"))?;
    tracing::info!(program = %program, pid = child.id(), "launched");
    Ok(())
}

/// Build the child process: null stdio and, on unix, a new session so it
/// drops the launcher's controlling terminal.
fn detached_command(argv: &[String]) -> Result<Command> {
    let Some((program, args)) = argv.split_first() else {
        bail!("empty argv");
    };
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // SAFETY: setsid is async-signal-safe and touches no parent state.
        unsafe {
            cmd.pre_exec(|| {
                if libc::setsid() == -1 {
                    return Err(std::io::Error::last_os_error());
                }
                Ok(())
            });
        }
    }
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_field_codes() {
        assert_eq!(clean_command("firefox %u"), "firefox ");
        assert_eq!(clean_command("gimp-2.10 %U --new"), "gimp-2.10  --new");
        assert_eq!(clean_command("trailing %"), "trailing ");
        assert_eq!(clean_command("xterm"), "xterm");
    }

    #[test]
    fn splits_into_argv() {
        assert_eq!(command_argv("xterm -e  bash %f"), ["xterm", "-e", "bash"]);
        assert_eq!(
            command_argv(r#"sh -c "echo hi""#),
            ["sh", "-c", "echo hi"]
        );
        assert_eq!(command_argv(r#"odd "quote"#), ["odd", "\"quote"]);
    }

    #[test]
    fn empty_command_is_an_error() {
        assert!(spawn_detached("%u").is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn child_leads_its_own_session() {
        let argv = command_argv("sleep 5");
        let mut child = detached_command(&argv).unwrap().spawn().unwrap();
        let pid = child.id();
        let stat = std::fs::read_to_string(format!("/proc/{pid}/stat")).unwrap();
        // Fields after the ")" closing the command name: state ppid pgrp session.
        let fields: Vec<&str> = stat[stat.rfind(')').unwrap() + 2..].split(' ').collect();
        let (pgrp, session): (u32, u32) = (fields[2].parse().unwrap(), fields[3].parse().unwrap());
        child.kill().unwrap();
        child.wait().unwrap();
        assert_eq!(session, pid);
        assert_eq!(pgrp, pid);
    }

    #[cfg(unix)]
    #[test]
    fn missing_program_is_an_error() {
        assert!(spawn_detached("definitely-not-a-real-program-rapp").is_err());
    }
}
