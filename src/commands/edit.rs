//! `edit` - interactively rewrite the formants of a phoneme

use super::{select_phoneme, Command, Context, Outcome};
use crate::editor::{parse_long, Terminal};
use crate::error::CommandResult;
use crate::voice::{render_phoneme, Formant, NUM_FORMANTS};

pub struct EditCommand;

impl Command for EditCommand {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn describe(&self) -> &'static str {
        "edit <Name/ID>    --  Edit the phoneme specified by <Name/ID>"
    }

    fn execute(&self, args: &str, ctx: &mut Context<'_, '_>) -> CommandResult<Outcome> {
        let index = select_phoneme(args)?;
        let selector = read_selector(ctx.terminal)?;

        for slot in 0..NUM_FORMANTS {
            if selector != 0 && selector != slot + 1 {
                continue;
            }

            let current = ctx.voice.phonemes[index].formants[slot];
            let formant = read_formant(ctx.terminal, slot, current)?;
            ctx.voice.phonemes[index].formants[slot] = formant;

            tracing::debug!(
                phoneme = index,
                formant = slot + 1,
                frequency = formant.frequency,
                bandwidth = formant.bandwidth,
                db_offset = formant.db_offset,
                "Formant updated"
            );
        }

        ctx.terminal
            .print(&render_phoneme(index, &ctx.voice.phonemes[index]))?;
        Ok(Outcome::Continue)
    }
}

/// Ask which formant to edit; 0 selects all of them
fn read_selector(terminal: &mut Terminal<'_>) -> CommandResult<usize> {
    let prompt = format!(
        "Which formant would you like to edit? [1 - {}, 0 = all]: ",
        NUM_FORMANTS
    );
    let selector = terminal.prompt_value(
        &prompt,
        |reply| reply.bytes().next().map(|b| usize::from(b.wrapping_sub(b'0'))),
        |selector| matches!(selector, Some(s) if *s <= NUM_FORMANTS),
    )?;
    Ok(selector.unwrap_or_default())
}

/// Read all three fields of one formant
///
/// The result is only returned once every field is valid, so the caller
/// never stores a half-edited formant.
fn read_formant(
    terminal: &mut Terminal<'_>,
    slot: usize,
    current: Formant,
) -> CommandResult<Formant> {
    let mut staged = current;
    let number = slot + 1;

    staged.frequency = terminal.prompt_value(
        &format!("Formant #{} frequency: ", number),
        positive_hz,
        |hz| *hz != 0,
    )?;
    staged.bandwidth = terminal.prompt_value(
        &format!("Formant #{} bandwidth: ", number),
        positive_hz,
        |hz| *hz != 0,
    )?;
    // Only formants after the first need a nonzero offset
    staged.db_offset = terminal.prompt_value(
        &format!("Formant #{} dB offset: ", number),
        decibels,
        |db| slot == 0 || *db != 0,
    )?;

    Ok(staged)
}

fn positive_hz(reply: &str) -> u32 {
    u32::try_from(parse_long(reply).unsigned_abs()).unwrap_or(u32::MAX)
}

fn decibels(reply: &str) -> i32 {
    parse_long(reply).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
