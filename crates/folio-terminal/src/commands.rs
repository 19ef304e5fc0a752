//! Built-in portfolio commands: help, about, skills, projects, experience,
//! contact, resume, whoami, motto, echo, clear.
//!
//! Every command renders from the session's `Profile` and never fails for
//! well-formed input.

use folio_types::error::{FolioError, Result};
use folio_types::style::LineStyle;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::markup::wrap;

/// Register all built-in commands, in the order `help` lists them.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(ExperienceCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(ResumeCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(MottoCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(ClearCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        if let Some(&name) = args.first() {
            return match env.registry.get(name) {
                Some(cmd) => Ok(CommandOutput::Text(format!(
                    "{}\n  {}\n  Usage: {}",
                    wrap(LineStyle::Command, cmd.name()),
                    cmd.description(),
                    cmd.usage()
                ))),
                None => Err(FolioError::Command(format!("no help for '{name}'"))),
            };
        }

        let cmds = env.registry.list_commands();
        let width = cmds.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let mut out = String::from("Available commands:\n");
        for (name, desc) in &cmds {
            let pad = " ".repeat(width - name.len());
            out.push_str(&format!(
                "  {}{pad}  {desc}\n",
                wrap(LineStyle::Command, name)
            ));
        }
        out.push_str("\nType 'help <command>' for usage. Use Tab to complete, Up/Down for history.");
        Ok(CommandOutput::Text(out))
    }
}

// ---------------------------------------------------------------------------
// about / whoami / motto
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Who I am"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let p = env.profile;
        let mut lines = vec![format!(
            "{} - {}",
            wrap(LineStyle::Success, &p.name),
            p.title
        )];
        if !p.tagline.is_empty() {
            lines.push(p.tagline.clone());
        }
        if !p.about.is_empty() {
            lines.push(String::new());
            lines.extend(p.about.iter().cloned());
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Name and title"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!(
            "{} ({})",
            env.profile.name, env.profile.title
        )))
    }
}

struct MottoCmd;
impl Command for MottoCmd {
    fn name(&self) -> &str {
        "motto"
    }
    fn description(&self) -> &str {
        "What I work by"
    }
    fn usage(&self) -> &str {
        "motto"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        if env.profile.motto.is_empty() {
            return Ok(CommandOutput::None);
        }
        Ok(CommandOutput::Text(format!("\"{}\"", env.profile.motto)))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Technical skills by area"
    }
    fn usage(&self) -> &str {
        "skills [group]"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let p = env.profile;
        if let Some(&group) = args.first() {
            let Some(found) = p.skill_group(group) else {
                let known: Vec<&str> = p.skills.iter().map(|g| g.name.as_str()).collect();
                return Ok(CommandOutput::Text(format!(
                    "{}\nKnown groups: {}",
                    wrap(LineStyle::Warning, &format!("no skill group '{group}'")),
                    known.join(", ")
                )));
            };
            return Ok(CommandOutput::Text(format!(
                "{}/\n  {}",
                wrap(LineStyle::Command, &found.name),
                found.items.join(", ")
            )));
        }

        if p.skills.is_empty() {
            return Ok(CommandOutput::Text("(no skills listed)".to_string()));
        }
        let width = p.skills.iter().map(|g| g.name.len()).max().unwrap_or(0);
        let lines: Vec<String> = p
            .skills
            .iter()
            .map(|g| {
                let pad = " ".repeat(width - g.name.len());
                format!(
                    "{}/{pad}  {}",
                    wrap(LineStyle::Command, &g.name),
                    g.items.join(", ")
                )
            })
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// projects / experience
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Things I have built"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let projects = &env.profile.projects;
        if projects.is_empty() {
            return Ok(CommandOutput::Text("(no projects listed)".to_string()));
        }
        let mut blocks = Vec::with_capacity(projects.len());
        for (i, project) in projects.iter().enumerate() {
            let mut block = format!("{}. {}", i + 1, wrap(LineStyle::Success, &project.name));
            if !project.description.is_empty() {
                block.push_str(&format!("\n   {}", project.description));
            }
            if !project.tech.is_empty() {
                block.push_str(&format!("\n   Tech: {}", project.tech.join(", ")));
            }
            if let Some(url) = &project.url {
                block.push_str(&format!("\n   {}", wrap(LineStyle::Info, url)));
            }
            blocks.push(block);
        }
        Ok(CommandOutput::Text(blocks.join("\n")))
    }
}

struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Work history"
    }
    fn usage(&self) -> &str {
        "experience"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let jobs = &env.profile.experience;
        if jobs.is_empty() {
            return Ok(CommandOutput::Text("(no experience listed)".to_string()));
        }
        let mut lines = Vec::new();
        for job in jobs {
            let mut heading = format!("{} @ {}", wrap(LineStyle::Success, &job.role), job.company);
            if !job.period.is_empty() {
                heading.push_str(&format!(" ({})", job.period));
            }
            lines.push(heading);
            lines.extend(job.highlights.iter().map(|h| format!("  - {h}")));
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// contact / resume
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "How to reach me"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let links = &env.profile.contact;
        if links.is_empty() {
            return Ok(CommandOutput::Text("(no contact details listed)".to_string()));
        }
        let width = links.iter().map(|l| l.label.len()).max().unwrap_or(0);
        let lines: Vec<String> = links
            .iter()
            .map(|l| format!("{:width$}  {}", l.label, wrap(LineStyle::Info, &l.value)))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

struct ResumeCmd;
impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn description(&self) -> &str {
        "Where to get my resume"
    }
    fn usage(&self) -> &str {
        "resume"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let url = &env.profile.resume_url;
        if url.is_empty() {
            return Ok(CommandOutput::Text(wrap(
                LineStyle::Warning,
                "resume not available",
            )));
        }
        Ok(CommandOutput::Text(format!(
            "{}\n{}",
            wrap(LineStyle::Success, "Resume ready for download:"),
            wrap(LineStyle::Info, url)
        )))
    }
}

// ---------------------------------------------------------------------------
// echo / clear
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print arguments"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        // `echo $MOTTO` mirrors the intro sequence.
        let words: Vec<&str> = args
            .iter()
            .map(|&a| if a == "$MOTTO" { env.profile.motto.as_str() } else { a })
            .collect();
        Ok(CommandOutput::Text(words.join(" ")))
    }
}

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}
