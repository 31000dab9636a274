//! Template selection, slot filling, and length expansion.

use crate::error::{ComposeError, ComposeResult};
use crate::templates::{self, Keyword, Template};
use rand::seq::SliceRandom;
use rand::Rng;
use story_metadata::{
    ColorName, Emotion, GenerationOptions, ObjectTag, PhotoSummary, Setting, StoryLength, Tone,
};
use tracing::warn;

/// Compose a story or poem for a photo summary. Total: any internal failure
/// lands in the fixed fallback pool instead of propagating.
pub fn compose(summary: &PhotoSummary, options: GenerationOptions) -> String {
    compose_with_rng(summary, options, &mut rand::thread_rng())
}

/// [`compose`] with an injected RNG so callers (and tests) can seed the
/// template and phrase draws.
pub fn compose_with_rng<R: Rng + ?Sized>(
    summary: &PhotoSummary,
    options: GenerationOptions,
    rng: &mut R,
) -> String {
    match compose_inner(summary, options, rng) {
        Ok(text) => text,
        Err(err) => {
            warn!("story composition failed ({err}), using fallback");
            fallback_story(summary, rng)
        }
    }
}

fn compose_inner<R: Rng + ?Sized>(
    summary: &PhotoSummary,
    options: GenerationOptions,
    rng: &mut R,
) -> ComposeResult<String> {
    let pool = templates::pool_for(options.form, options.tone);
    let template = select_template(pool, summary, rng).ok_or(ComposeError::EmptyPool {
        form: options.form,
        tone: options.tone,
    })?;

    let text = fill_slots(template.text, summary, options.tone, rng);
    let text = capitalize_sentences(&text);
    Ok(expand(text, summary, options.length))
}

/// Keyword bias: photos with people prefer a relationship-tagged template,
/// nature/forest settings prefer a nature-tagged one; each falls back to
/// the pool's first template, and only the unbiased case draws at random.
fn select_template<'a, R: Rng + ?Sized>(
    pool: &'a [Template],
    summary: &PhotoSummary,
    rng: &mut R,
) -> Option<&'a Template> {
    if pool.is_empty() {
        return None;
    }

    if summary.people.unwrap_or(0) > 0 {
        return Some(
            pool.iter()
                .find(|t| {
                    t.keywords.contains(&Keyword::Hearts) || t.keywords.contains(&Keyword::Souls)
                })
                .unwrap_or(&pool[0]),
        );
    }

    if matches!(summary.setting, Setting::Nature | Setting::Forest) {
        return Some(
            pool.iter()
                .find(|t| {
                    t.keywords.contains(&Keyword::Dance) || t.keywords.contains(&Keyword::Whisper)
                })
                .unwrap_or(&pool[0]),
        );
    }

    pool.choose(rng)
}

fn fill_slots<R: Rng + ?Sized>(
    template: &str,
    summary: &PhotoSummary,
    tone: Tone,
    rng: &mut R,
) -> String {
    let action = templates::actions_for(tone)
        .choose(rng)
        .copied()
        .unwrap_or("find wonder");
    let characters = match summary.people.unwrap_or(0) {
        0 => "wandering spirits",
        1 => "the solitary figure",
        _ => "the companions",
    };

    let mut text = template.to_string();
    text = replace_slot(text, "setting", &summary.setting.to_string());
    text = replace_slot(text, "colors", &join_colors(&summary.colors, 2));
    text = replace_slot(text, "description", &summary.description);
    text = replace_slot(text, "mood", &summary.mood.to_string());
    text = replace_slot(text, "objects", &join_objects(&summary.objects));
    text = replace_slot(text, "emotions", &join_emotions(summary.emotions.as_deref()));
    text = replace_slot(text, "story_element", action);
    text = replace_slot(text, "characters", characters);
    text
}

/// Replace every `{name}` with the value and every `{Name}` with the
/// capitalized value.
fn replace_slot(text: String, name: &str, value: &str) -> String {
    let capitalized = capitalize_first(name);
    text.replace(&format!("{{{name}}}"), value)
        .replace(&format!("{{{capitalized}}}"), &capitalize_first(value))
}

fn join_colors(colors: &[ColorName], take: usize) -> String {
    colors
        .iter()
        .take(take)
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}

fn join_objects(objects: &[ObjectTag]) -> String {
    objects
        .iter()
        .take(2)
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}

fn join_emotions(emotions: Option<&[Emotion]>) -> String {
    match emotions {
        Some(list) if !list.is_empty() => list
            .iter()
            .take(2)
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(" and "),
        _ => "wonder".to_string(),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first letter of the text and any letter following ". " or
/// a line break, so lowercase slot values landing at sentence starts read
/// correctly.
fn capitalize_sentences(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let sentence_start = i == 0
            || chars[i - 1] == '\n'
            || (i >= 2 && chars[i - 1] == ' ' && chars[i - 2] == '.');
        if sentence_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn expand(base: String, summary: &PhotoSummary, length: StoryLength) -> String {
    if length == StoryLength::Short {
        return base;
    }

    let expansions = elaborations(summary);
    match length {
        StoryLength::Medium => format!("{} {}", base, expansions[..1].join(" ")),
        StoryLength::Long => format!("{} {}", base, expansions.join(" ")),
        StoryLength::Short => base,
    }
}

/// Ordered optional elaboration sentences; the colors sentence is always
/// present so the list is never empty.
fn elaborations(summary: &PhotoSummary) -> Vec<String> {
    let mut expansions = Vec::new();

    if summary.setting == Setting::Nature {
        let element = summary
            .objects
            .first()
            .map(|o| o.to_string())
            .unwrap_or_else(|| "element".to_string());
        expansions.push(format!(
            "The natural world seems to breathe with life, where every {element} tells its own story of growth and renewal."
        ));
    }

    if let Some(emotions) = summary.emotions.as_deref() {
        if let Some(first) = emotions.first() {
            expansions.push(format!(
                "These moments of {first} remind us that beauty exists in the simplest observations, waiting to be discovered by those who pause to truly see."
            ));
        }
    }

    let colors = summary
        .colors
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    expansions.push(format!(
        "The interplay of {colors} creates a visual symphony that speaks to something deeper than mere sight, touching the very essence of human experience."
    ));

    expansions
}

/// Last-resort pool: three fixed sentences needing no action or character
/// slots, drawn uniformly.
fn fallback_story<R: Rng + ?Sized>(summary: &PhotoSummary, rng: &mut R) -> String {
    let colors = join_colors(&summary.colors, summary.colors.len());
    let objects = summary
        .objects
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(" and ");
    let emotions = match summary.emotions.as_deref() {
        Some(list) if !list.is_empty() => list
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(" and "),
        _ => "mystery and beauty".to_string(),
    };

    let candidates = [
        format!(
            "In this captured moment, the essence of {} permeates every detail. The {} tones create a {} that invites contemplation and wonder.",
            summary.mood, colors, summary.setting
        ),
        format!(
            "Here, where {} meet the eye, a story unfolds of {}. This image captures more than a moment — it preserves a feeling.",
            objects, emotions
        ),
        format!(
            "The {} speaks to the heart in ways that words can barely capture. In this {}, we find a reflection of life's infinite complexity and simple truths.",
            summary.description, summary.setting
        ),
    ];

    candidates
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| summary.description.clone())
}
