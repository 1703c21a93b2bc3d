//! The portfolio command catalog.
//!
//! `COMMANDS` is the registry in enumeration order (which is also the order of
//! suggestions and of `/help`). `PortfolioHandlers` renders the payload of
//! every content command from [`content`].

use crate::auth::Session;
use crate::config::ShellConfig;
use crate::error::CliError;
use crate::registry::{Access, CommandKind, CommandMeta, CommandRegistry};
use crate::response::CommandResult;
use crate::shell::Terminal;
use crate::shell::handler::{CommandContext, CommandHandler};

pub mod content;

use content::{CERTIFICATIONS, CONTACT, EXPERIENCE, PROFILE, PROJECTS, RESUME_PATH, SKILLS};

const fn public(name: &'static str, description: &'static str) -> CommandMeta {
    CommandMeta {
        name,
        description,
        access: Access::Public,
        kind: CommandKind::Content,
    }
}

const fn developer(name: &'static str, description: &'static str) -> CommandMeta {
    CommandMeta {
        name,
        description,
        access: Access::Developer,
        kind: CommandKind::Content,
    }
}

/// Every portfolio command, public first.
pub const COMMANDS: &[CommandMeta] = &[
    public("help", "List available commands"),
    public("me", "About me"),
    public("resume", "Experience and projects"),
    public("contact", "How to reach me"),
    public("skills", "Technical skills"),
    public("certifications", "Certifications"),
    public("download", "Download the resume PDF"),
    CommandMeta {
        name: "clear",
        description: "Clear the screen",
        access: Access::Public,
        kind: CommandKind::Clear,
    },
    CommandMeta {
        name: "login",
        description: "Developer sign-in",
        access: Access::Public,
        kind: CommandKind::Login,
    },
    CommandMeta {
        name: "logout",
        description: "End the developer session",
        access: Access::Developer,
        kind: CommandKind::Logout,
    },
    developer("whoami", "Show the signed-in identity"),
    developer("dev", "Terminal diagnostics"),
    developer("secret", "Command usage analytics"),
];

/// Registry over [`COMMANDS`].
pub const REGISTRY: CommandRegistry = CommandRegistry::new(COMMANDS);

/// Build a terminal serving the portfolio commands.
pub fn terminal<C: ShellConfig>() -> Terminal<PortfolioHandlers, C> {
    Terminal::new(REGISTRY, PortfolioHandlers)
}

/// Handlers for the portfolio content commands.
#[derive(Debug, Default, Copy, Clone)]
pub struct PortfolioHandlers;

impl CommandHandler for PortfolioHandlers {
    fn execute(&self, name: &str, ctx: &CommandContext<'_>) -> Result<CommandResult, CliError> {
        let text = match name {
            "help" => help(ctx),
            "me" => me(),
            "resume" => resume(),
            "contact" => contact(),
            "skills" => skills(),
            "certifications" => certifications(),
            "download" => download(),
            "whoami" => whoami(ctx.session)?,
            "dev" => dev(ctx),
            "secret" => secret(ctx),
            _ => return Err(CliError::CommandNotFound(format!("/{}", name))),
        };
        Ok(CommandResult::Output(text))
    }
}

fn help(ctx: &CommandContext<'_>) -> String {
    let width = ctx.visible.iter().map(|c| c.name.len()).max().unwrap_or(0) + 1;

    let mut lines = vec!["Available commands:".to_string()];
    for cmd in &ctx.visible {
        let tag = if cmd.is_developer() { " [dev]" } else { "" };
        lines.push(format!(
            "  /{:<width$} {}{}",
            cmd.name,
            cmd.description,
            tag,
            width = width
        ));
    }
    lines.push(String::new());
    lines.push("Tab completes, Up/Down recall earlier commands.".to_string());
    lines.join("\n")
}

fn me() -> String {
    let mut lines = vec![
        PROFILE.name.to_string(),
        PROFILE.headline.to_string(),
        String::new(),
        format!("{} (minor: {})", PROFILE.program, PROFILE.minor),
        format!("Class of {} · GPA {}", PROFILE.class_of, PROFILE.gpa),
        String::new(),
        "Interests:".to_string(),
    ];
    lines.extend(PROFILE.interests.iter().map(|i| format!("  - {}", i)));
    lines.push(String::new());
    lines.push(PROFILE.summary.to_string());
    lines.join("\n")
}

fn resume() -> String {
    let mut lines = vec!["EXPERIENCE".to_string()];
    for job in EXPERIENCE {
        lines.push(String::new());
        lines.push(format!("{} | {} ({})", job.role, job.org, job.period));
        lines.extend(job.bullets.iter().map(|b| format!("  - {}", b)));
    }

    lines.push(String::new());
    lines.push("PROJECTS".to_string());
    for project in PROJECTS {
        lines.push(String::new());
        lines.push(format!("{} ({})", project.name, project.period));
        lines.push(format!("  {}", project.stack));
        lines.push(format!("  {}", project.desc));
        lines.extend(project.bullets.iter().map(|b| format!("  - {}", b)));
    }

    lines.push(String::new());
    lines.push("Type /download for the PDF.".to_string());
    lines.join("\n")
}

fn contact() -> String {
    let mut lines: Vec<String> = CONTACT
        .iter()
        .map(|link| format!("{:<9} {}", format!("{}:", link.label), link.value))
        .collect();
    lines.push(String::new());
    lines.push(format!("Based in {}.", PROFILE.location));
    lines.join("\n")
}

fn skills() -> String {
    SKILLS
        .iter()
        .map(|group| format!("{}:\n  {}", group.category, group.items.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn certifications() -> String {
    CERTIFICATIONS
        .iter()
        .map(|cert| format!("[{}] {} ({})", cert.year, cert.name, cert.provider))
        .collect::<Vec<_>>()
        .join("\n")
}

fn download() -> String {
    format!("Resume: {}", RESUME_PATH)
}

fn whoami(session: &Session) -> Result<String, CliError> {
    // Gate already passed; a missing identity means the session changed underneath
    let identity = session.identity().ok_or(CliError::NotAuthenticated)?;
    Ok(format!(
        "Email:        {}\nUser ID:      {}\nLast sign-in: {}",
        identity.email,
        identity.id,
        identity.last_sign_in_at.to_rfc3339()
    ))
}

fn dev(ctx: &CommandContext<'_>) -> String {
    format!(
        "{} v{}\nRegistered commands: {}\nVisible commands:    {}\nCommands submitted:  {}\nDisplay entries:     {}",
        crate::NAME,
        crate::VERSION,
        ctx.registry_len,
        ctx.visible.len(),
        ctx.log.len(),
        ctx.display_len
    )
}

fn secret(ctx: &CommandContext<'_>) -> String {
    let log = ctx.log;
    format!(
        "Commands submitted: {}\nFirst: {}\nLast:  {}",
        log.len(),
        log.first().unwrap_or("(none)"),
        log.last().unwrap_or("(none)")
    )
}
