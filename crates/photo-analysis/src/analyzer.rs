//! Heuristic pixel analysis: strided color sampling, full-buffer brightness,
//! IQR contrast, and rule-based mood/setting/object inference.

use story_metadata::{ColorName, Mood, ObjectTag, PhotoSummary, Setting};
use tracing::debug;

const BYTES_PER_PIXEL: usize = 4;
/// Sample every 10th pixel (RGBA) for the strided passes.
const SAMPLE_STRIDE_BYTES: usize = 40;

/// Analyze a raw RGBA buffer into a [`PhotoSummary`].
///
/// Total and deterministic: a degenerate buffer yields the fixed fallback
/// summary instead of an error, and identical input always yields an
/// identical summary.
pub fn analyze_pixels(data: &[u8], width: u32, height: u32) -> PhotoSummary {
    if data.len() < BYTES_PER_PIXEL || width == 0 || height == 0 {
        debug!("degenerate pixel buffer ({} bytes), using fallback summary", data.len());
        return PhotoSummary::fallback();
    }

    let color_stats = sample_colors(data);
    let brightness = average_brightness(data);
    let contrast = luma_interquartile_range(data);

    let mood = infer_mood(&color_stats.dominant, brightness, contrast);
    let setting = infer_setting(&color_stats.dominant, brightness);
    let description = describe(&color_stats.dominant, mood, setting, brightness);
    let objects = detect_objects(&color_stats.dominant, brightness, contrast);
    let people = estimate_people(data);

    debug!(
        brightness,
        contrast,
        ?mood,
        ?setting,
        people,
        average_rgb = ?color_stats.average,
        "photo analysis complete"
    );

    PhotoSummary {
        description,
        objects,
        colors: color_stats.dominant,
        mood,
        setting,
        people: Some(people),
        emotions: Some(mood.emotions().to_vec()),
    }
}

struct ColorStats {
    /// Up to 3 color names, most frequently sampled first. Ties keep
    /// first-seen order.
    dominant: Vec<ColorName>,
    /// Mean sampled (R, G, B). Not surfaced in the summary, logged for
    /// diagnostics.
    average: [f32; 3],
}

fn sample_colors(data: &[u8]) -> ColorStats {
    let mut tally: Vec<(ColorName, usize)> = Vec::new();
    let mut sum = [0u64; 3];
    let mut samples = 0u64;

    let mut i = 0;
    while i + 2 < data.len() {
        let (r, g, b) = (data[i], data[i + 1], data[i + 2]);
        sum[0] += r as u64;
        sum[1] += g as u64;
        sum[2] += b as u64;
        samples += 1;

        let name = classify_color(r, g, b);
        match tally.iter_mut().find(|(c, _)| *c == name) {
            Some((_, count)) => *count += 1,
            None => tally.push((name, 1)),
        }
        i += SAMPLE_STRIDE_BYTES;
    }

    // Stable sort keeps first-seen order between equal counts.
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    let dominant = tally.into_iter().take(3).map(|(c, _)| c).collect();
    let average = [
        sum[0] as f32 / samples as f32,
        sum[1] as f32 / samples as f32,
        sum[2] as f32 / samples as f32,
    ];

    ColorStats { dominant, average }
}

/// Ordered threshold rules; the first match wins, everything else is brown.
fn classify_color(r: u8, g: u8, b: u8) -> ColorName {
    if r > 200 && g > 200 && b > 200 {
        ColorName::White
    } else if r < 50 && g < 50 && b < 50 {
        ColorName::Black
    } else if r > g && r > b {
        ColorName::Red
    } else if g > r && g > b {
        ColorName::Green
    } else if b > r && b > g {
        ColorName::Blue
    } else if r > 150 && g > 150 && b < 100 {
        ColorName::Yellow
    } else if r > 150 && g < 100 && b > 150 {
        ColorName::Purple
    } else if r < 100 && g > 150 && b > 150 {
        ColorName::Cyan
    } else if r > 100 && g > 100 && b > 100 {
        ColorName::Gray
    } else {
        ColorName::Brown
    }
}

fn luma(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114) / 255.0
}

/// Mean luma over every pixel of the buffer (not the strided sample).
fn average_brightness(data: &[u8]) -> f32 {
    let mut total = 0.0f64;
    let mut pixels = 0u64;
    let mut i = 0;
    while i + 2 < data.len() {
        total += luma(data[i], data[i + 1], data[i + 2]) as f64;
        pixels += 1;
        i += BYTES_PER_PIXEL;
    }
    (total / pixels as f64) as f32
}

/// Interquartile range of the strided luma sample.
fn luma_interquartile_range(data: &[u8]) -> f32 {
    let mut lumas: Vec<f32> = Vec::new();
    let mut i = 0;
    while i + 2 < data.len() {
        lumas.push(luma(data[i], data[i + 1], data[i + 2]));
        i += SAMPLE_STRIDE_BYTES;
    }
    lumas.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = lumas[(lumas.len() as f32 * 0.25) as usize];
    let q3 = lumas[(lumas.len() as f32 * 0.75) as usize];
    q3 - q1
}

fn infer_mood(colors: &[ColorName], brightness: f32, contrast: f32) -> Mood {
    if brightness > 0.7 && colors.contains(&ColorName::Yellow) {
        Mood::Cheerful
    } else if brightness < 0.3 {
        Mood::Mysterious
    } else if colors.contains(&ColorName::Blue) && brightness > 0.5 {
        Mood::Peaceful
    } else if colors.contains(&ColorName::Red) {
        Mood::Passionate
    } else if colors.contains(&ColorName::Green) {
        Mood::Natural
    } else if contrast > 0.4 {
        Mood::Dramatic
    } else if brightness > 0.6 {
        Mood::Bright
    } else {
        Mood::Contemplative
    }
}

fn infer_setting(colors: &[ColorName], brightness: f32) -> Setting {
    if colors.contains(&ColorName::Blue) && colors.contains(&ColorName::White) {
        Setting::Sky
    } else if colors.contains(&ColorName::Green) && brightness > 0.4 {
        Setting::Nature
    } else if colors.contains(&ColorName::Brown) && colors.contains(&ColorName::Green) {
        Setting::Forest
    } else if brightness < 0.4 && colors.contains(&ColorName::Black) {
        Setting::Night
    } else if colors.contains(&ColorName::Gray) && colors.contains(&ColorName::White) {
        Setting::Urban
    } else if brightness > 0.7 {
        Setting::BrightDaylight
    } else {
        Setting::Indoor
    }
}

fn describe(colors: &[ColorName], mood: Mood, setting: Setting, brightness: f32) -> String {
    let color_desc = colors
        .iter()
        .take(2)
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" and ");
    let light_desc = if brightness > 0.6 {
        "bright"
    } else if brightness < 0.3 {
        "dim"
    } else {
        "softly lit"
    };

    format!("A {mood} scene with {color_desc} tones, {light_desc} and set in a {setting} environment")
}

/// Non-exclusive rule set; every matching rule appends its tags.
fn detect_objects(colors: &[ColorName], brightness: f32, contrast: f32) -> Vec<ObjectTag> {
    let mut objects = Vec::new();

    if colors.contains(&ColorName::Green) {
        objects.push(ObjectTag::Vegetation);
    }
    if colors.contains(&ColorName::Blue) && brightness > 0.5 {
        objects.push(ObjectTag::Sky);
    }
    if colors.contains(&ColorName::Brown) {
        objects.push(ObjectTag::Earth);
        objects.push(ObjectTag::Wood);
    }
    if colors.contains(&ColorName::Gray) {
        objects.push(ObjectTag::Stone);
        objects.push(ObjectTag::Concrete);
    }
    if contrast > 0.5 {
        objects.push(ObjectTag::DistinctShapes);
    }

    if objects.is_empty() {
        objects.push(ObjectTag::VariousElements);
    }
    objects
}

/// Skin-tone ratio over the strided sample, mapped to a rough people count.
/// A proxy, not person detection.
fn estimate_people(data: &[u8]) -> u32 {
    let mut skin = 0u32;
    let mut total = 0u32;
    let mut i = 0;
    while i + 2 < data.len() {
        let (r, g, b) = (data[i] as i32, data[i + 1] as i32, data[i + 2] as i32);
        if r > 95 && g > 40 && b > 20 && r > g && r > b && r - g > 15 {
            skin += 1;
        }
        total += 1;
        i += SAMPLE_STRIDE_BYTES;
    }

    let ratio = skin as f32 / total as f32;
    if ratio > 0.1 {
        (ratio * 10.0).ceil() as u32
    } else if ratio > 0.05 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use story_metadata::Emotion;

    fn solid_buffer(r: u8, g: u8, b: u8, pixels: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&[r, g, b, 255]);
        }
        data
    }

    #[test]
    fn test_empty_buffer_yields_fallback() {
        assert_eq!(analyze_pixels(&[], 0, 0), PhotoSummary::fallback());
        assert_eq!(analyze_pixels(&[1, 2], 1, 1), PhotoSummary::fallback());
        assert_eq!(
            analyze_pixels(&solid_buffer(10, 10, 10, 4), 2, 0),
            PhotoSummary::fallback()
        );
    }

    #[test]
    fn test_all_yellow_buffer() {
        let data = solid_buffer(255, 255, 0, 100);
        let summary = analyze_pixels(&data, 10, 10);

        assert_eq!(summary.colors, vec![ColorName::Yellow]);
        assert_eq!(summary.mood, Mood::Cheerful);
        assert_eq!(summary.setting, Setting::BrightDaylight);
        assert_eq!(summary.people, Some(0));
        assert_eq!(
            summary.emotions,
            Some(vec![Emotion::Joy, Emotion::Happiness])
        );
        // 0.299 + 0.587 = 0.886
        let brightness = average_brightness(&data);
        assert!((brightness - 0.886).abs() < 1e-3);
    }

    #[test]
    fn test_all_black_buffer() {
        let data = solid_buffer(0, 0, 0, 64);
        let summary = analyze_pixels(&data, 8, 8);

        assert_eq!(summary.colors, vec![ColorName::Black]);
        assert_eq!(summary.mood, Mood::Mysterious);
        assert_eq!(summary.setting, Setting::Night);
        assert_eq!(average_brightness(&data), 0.0);
        assert_eq!(
            summary.emotions,
            Some(vec![Emotion::Intrigue, Emotion::Wonder])
        );
    }

    #[test]
    fn test_color_classification_precedence() {
        assert_eq!(classify_color(255, 255, 255), ColorName::White);
        assert_eq!(classify_color(10, 10, 10), ColorName::Black);
        assert_eq!(classify_color(200, 50, 50), ColorName::Red);
        assert_eq!(classify_color(50, 200, 50), ColorName::Green);
        assert_eq!(classify_color(50, 50, 200), ColorName::Blue);
        // r == g keeps yellow out of the red branch
        assert_eq!(classify_color(255, 255, 0), ColorName::Yellow);
        assert_eq!(classify_color(180, 180, 50), ColorName::Yellow);
        assert_eq!(classify_color(120, 120, 120), ColorName::Gray);
        assert_eq!(classify_color(100, 100, 100), ColorName::Brown);
        assert_eq!(classify_color(170, 170, 170), ColorName::Gray);
    }

    #[test]
    fn test_dominant_colors_ordered_by_frequency() {
        // 30 pixels: 20 black then 10 white, so black outnumbers white
        // in the strided sample as well.
        let mut data = solid_buffer(0, 0, 0, 20);
        data.extend(solid_buffer(255, 255, 255, 10));
        let summary = analyze_pixels(&data, 30, 1);

        assert_eq!(summary.colors[0], ColorName::Black);
        assert!(summary.colors.len() <= 3);
    }

    #[test]
    fn test_brightness_is_full_buffer_while_sampling_is_strided() {
        // 20 white pixels; pixel 1 is off the 10-pixel sampling stride.
        let mut data = solid_buffer(255, 255, 255, 20);
        let baseline_brightness = average_brightness(&data);
        let baseline = analyze_pixels(&data, 20, 1);

        data[4] = 0;
        data[5] = 0;
        data[6] = 0;
        let summary = analyze_pixels(&data, 20, 1);

        assert!(average_brightness(&data) < baseline_brightness);
        // The strided passes only see pixels 0 and 10, both still white.
        assert_eq!(summary.colors, baseline.colors);
        assert_eq!(summary.colors, vec![ColorName::White]);
    }

    #[test]
    fn test_contrast_drives_dramatic_mood() {
        // 40 pixels, half mid-red and half white: samples alternate between
        // dark and bright lumas, pushing the IQR over the dramatic bound
        // while mean brightness stays in the middle band.
        let mut data = Vec::new();
        for chunk in 0..4 {
            let pixels = if chunk % 2 == 0 {
                solid_buffer(120, 0, 0, 10)
            } else {
                solid_buffer(255, 255, 255, 10)
            };
            data.extend(pixels);
        }
        let contrast = luma_interquartile_range(&data);
        assert!(contrast > 0.4);

        let summary = analyze_pixels(&data, 40, 1);
        // Red is present so the passionate rule fires before dramatic.
        assert_eq!(summary.mood, Mood::Passionate);
        assert!(summary.objects.contains(&ObjectTag::DistinctShapes));
    }

    #[test]
    fn test_solid_color_has_zero_contrast() {
        let data = solid_buffer(90, 140, 60, 50);
        assert_eq!(luma_interquartile_range(&data), 0.0);
    }

    #[test]
    fn test_green_scene_is_natural_nature() {
        let data = solid_buffer(60, 180, 70, 100);
        let summary = analyze_pixels(&data, 10, 10);

        assert_eq!(summary.colors, vec![ColorName::Green]);
        assert_eq!(summary.mood, Mood::Natural);
        assert_eq!(summary.setting, Setting::Nature);
        assert_eq!(summary.objects, vec![ObjectTag::Vegetation]);
        assert!(summary.description.contains("natural"));
        assert!(summary.description.contains("green"));
        assert!(summary.description.contains("nature"));
    }

    #[test]
    fn test_skin_tones_raise_people_estimate() {
        let data = solid_buffer(150, 100, 60, 100);
        assert_eq!(estimate_people(&data), 10);

        let none = solid_buffer(60, 100, 150, 100);
        assert_eq!(estimate_people(&none), 0);
    }

    #[test_log::test]
    fn test_analysis_is_deterministic() {
        let mut data = Vec::new();
        for i in 0..200u32 {
            data.extend_from_slice(&[(i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8, 255]);
        }
        let first = analyze_pixels(&data, 20, 10);
        let second = analyze_pixels(&data, 20, 10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_description_light_bands() {
        let bright = analyze_pixels(&solid_buffer(255, 255, 255, 16), 4, 4);
        assert!(bright.description.contains("bright"));

        let dim = analyze_pixels(&solid_buffer(20, 20, 20, 16), 4, 4);
        assert!(dim.description.contains("dim"));

        let soft = analyze_pixels(&solid_buffer(120, 120, 120, 16), 4, 4);
        assert!(soft.description.contains("softly lit"));
    }
}
