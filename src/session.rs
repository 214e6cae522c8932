//! Interactive flow: collect the match, generate title, tags, and description.

use crate::logic::{
    character_candidates, compose_description, compose_tags, compose_title,
    parse_character_count, round_detail_options, CharacterPicker, SlotChoice,
    GRAND_FINALS_NOTICE,
};
use crate::models::{BracketType, DataStore, MatchContext};
use std::io::{self, BufRead, Write};

/// Line input and output for one session.
pub trait Prompter {
    /// Read one line (trimmed). `candidates` are offered for completion.
    fn ask(&mut self, prompt: &str, candidates: &[String]) -> io::Result<String>;

    /// Informational line: listings, notices, rejected input.
    fn notify(&mut self, message: &str) -> io::Result<()>;

    /// A generated result under a heading.
    fn show(&mut self, heading: &str, body: &str) -> io::Result<()>;
}

/// Whether `candidate` starts with `prefix`, ignoring case.
pub fn matches_prefix(candidate: &str, prefix: &str) -> bool {
    candidate.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// First candidate that starts with `prefix`, ignoring case.
pub fn complete<'a>(prefix: &str, candidates: &'a [String]) -> Option<&'a str> {
    candidates
        .iter()
        .find(|c| matches_prefix(c, prefix))
        .map(String::as_str)
}

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Prompter on stdin/stdout.
///
/// Ending a line with a TAB completes what was typed to the first matching
/// candidate once the line is submitted. There is no completion while typing;
/// input is read a whole line at a time.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, prompt: &str, candidates: &[String]) -> io::Result<String> {
        write!(self.output, "{RED}{prompt}{RESET}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if let Some(prefix) = line.strip_suffix('\t') {
            if let Some(done) = complete(prefix.trim(), candidates) {
                writeln!(self.output, "→ {done}")?;
                return Ok(done.to_string());
            }
        }
        Ok(line.trim().to_string())
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn show(&mut self, heading: &str, body: &str) -> io::Result<()> {
        writeln!(self.output, "\n{BOLD}{heading}{RESET}\n{body}")?;
        self.output.flush()
    }
}

/// Everything generated in one session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionOutput {
    pub title: String,
    pub tags: String,
    pub description: String,
}

fn ask_required<P: Prompter>(
    prompter: &mut P,
    prompt: &str,
    candidates: &[String],
    missing: &str,
) -> io::Result<String> {
    loop {
        let value = prompter.ask(prompt, candidates)?;
        if !value.is_empty() {
            return Ok(value);
        }
        prompter.notify(missing)?;
    }
}

/// Show history, ask for a count, then fill each slot.
fn choose_characters<P: Prompter>(
    store: &mut DataStore,
    prompter: &mut P,
    player_input: &str,
) -> io::Result<(String, Vec<String>)> {
    let candidates = character_candidates(store, player_input);
    let mut picker = CharacterPicker::new(store.player_entry(player_input));
    let name = picker.display_name().to_string();

    prompter.notify(&format!("\nTop characters for {name}:"))?;
    let top = top_lines(&picker);
    if top.is_empty() {
        prompter.notify("  (none yet)")?;
    }
    for line in top {
        prompter.notify(&line)?;
    }

    let count = loop {
        let raw = prompter.ask(&format!("How many characters did {name} play? [1] "), &[])?;
        match parse_character_count(&raw) {
            Ok(n) => break n,
            Err(e) => prompter.notify(&e.to_string())?,
        }
    };

    for slot in 1..=count {
        let prompt = format!("Character {slot} for {name} (leave blank to auto-select): ");
        let typed = prompter.ask(&prompt, &candidates)?;
        if let SlotChoice::Auto(c) = picker.pick(Some(typed.as_str())) {
            prompter.notify(&format!("→ Auto-selected: {c}"))?;
        }
    }
    Ok(picker.finish())
}

fn top_lines(picker: &CharacterPicker<'_>) -> Vec<String> {
    picker
        .ranked()
        .iter()
        .enumerate()
        .map(|(i, (c, n))| format!("  {}. {} ({} times played)", i + 1, c, n))
        .collect()
}

/// Positive integer input, else `default`.
pub fn parse_event_number(raw: &str, default: u32) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return default;
    }
    raw.parse().ok().filter(|n| *n > 0).unwrap_or(default)
}

fn ask_bracket<P: Prompter>(prompter: &mut P) -> io::Result<BracketType> {
    let options: Vec<String> = BracketType::ALL.iter().map(|b| b.to_string()).collect();
    loop {
        let raw = prompter.ask("Enter round type (Winners, Losers, Pools): ", &options)?;
        match raw.parse::<BracketType>() {
            Ok(b) => return Ok(b),
            Err(e) => prompter.notify(&e.to_string())?,
        }
    }
}

/// Run one full session against `store`.
///
/// Mutates player usage counts and the event registry; the caller saves.
pub fn run_session<P: Prompter>(
    store: &mut DataStore,
    prompter: &mut P,
) -> io::Result<SessionOutput> {
    let names = store.player_names();
    let p1_input = ask_required(
        prompter,
        "Enter player 1 name: ",
        &names,
        "Player 1 name is required. Please try again.",
    )?;
    let p2_input = ask_required(
        prompter,
        "Enter player 2 name: ",
        &names,
        "Player 2 name is required. Please try again.",
    )?;

    let (player1, chars1) = choose_characters(store, prompter, &p1_input)?;
    let (player2, chars2) = choose_characters(store, prompter, &p2_input)?;

    let event_names = store.events.names();
    if event_names.is_empty() {
        prompter.notify("\nNo existing events found.")?;
    } else {
        prompter.notify("\nAvailable events:")?;
        for name in &event_names {
            prompter.notify(&format!("  {name}"))?;
        }
    }
    let default_name = store.events.default_name();
    let typed = prompter.ask(&format!("Enter event name [{default_name}]: "), &event_names)?;
    let event_name = if typed.is_empty() { default_name } else { typed };

    let latest = store.events.latest_number(&event_name);
    let raw_number = prompter.ask(&format!("Enter event number [{latest}]: "), &[])?;
    let event_number = parse_event_number(&raw_number, latest);

    let bracket = ask_bracket(prompter)?;
    let round_detail = if bracket.has_rounds() {
        prompter.notify("\nAvailable rounds:")?;
        for line in [
            "  Round N (rN)",
            "  Quarterfinals (qf)",
            "  Semifinals (sf)",
            "  Finals (f)",
            "  Grand Finals (gf)",
        ] {
            prompter.notify(line)?;
        }
        prompter.ask("Enter round detail: ", &round_detail_options())?
    } else {
        String::new()
    };

    let ctx = MatchContext {
        player1,
        player2,
        chars1,
        chars2,
        event_name,
        event_number,
    };

    let composed = compose_title(store, &ctx, bracket, &round_detail);
    if composed.downgraded {
        prompter.notify(GRAND_FINALS_NOTICE)?;
    }
    prompter.show("Generated YouTube title:", &composed.title)?;

    let tags = compose_tags(&ctx, &store.character_aliases);
    prompter.show(
        "Generated YouTube tags:",
        &format!("{}\n\nCharacter count: {}", tags, tags.chars().count()),
    )?;

    let event_title = ctx.event_title();
    if let Some(event) = store
        .events
        .find_by_name_and_number_mut(&ctx.event_name, ctx.event_number)
    {
        let playlist = if event.needs_playlist() {
            Some(prompter.ask(
                &format!("Enter playlist link for '{event_title}' (or leave blank): "),
                &[],
            )?)
        } else {
            None
        };
        let bracket_link = if event.needs_bracket() {
            Some(prompter.ask(
                &format!("Enter bracket/results link for '{event_title}' (or leave blank): "),
                &[],
            )?)
        } else {
            None
        };
        if event.attach_links(playlist.as_deref(), bracket_link.as_deref()) {
            prompter.notify("Event links updated.")?;
        }
    }

    let event = store
        .events
        .find_by_name_and_number(&ctx.event_name, ctx.event_number);
    let description =
        compose_description(&ctx, event, &composed.round, &store.character_aliases);
    prompter.show("Generated YouTube description:", &description)?;

    Ok(SessionOutput {
        title: composed.title,
        tags,
        description,
    })
}
