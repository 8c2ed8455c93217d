//! Renovation style catalog and the fixed generation parameters.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Generation parameters shared by every style
// ---------------------------------------------------------------------------

/// Negative prompt sent with every generation, regardless of style.
pub const GENERATION_NEGATIVE_PROMPT: &str = "lowres, watermark, banner, logo, watermark, contactinfo, text, deformed, blurry, blur, out of focus, out of frame, surreal, extra, ugly, upholstered walls, fabric walls, plush walls, mirror, mirrored, functional";

/// Diffusion step count sent with every generation.
pub const NUM_INFERENCE_STEPS: u32 = 25;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A named visual theme and the prompt pair describing it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StyleEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
    pub negative_prompt: &'static str,
}

pub const STYLES: &[StyleEntry] = &[
    StyleEntry {
        id: "modern",
        label: "モダン",
        prompt: "A sleek modern minimalist interior with clean lines, neutral color palette, open floor plan, floor-to-ceiling windows, polished concrete floors, designer furniture, ambient LED lighting, and sophisticated architectural details",
        negative_prompt: "old, damaged, dark, cluttered, low quality, traditional, ornate",
    },
    StyleEntry {
        id: "traditional",
        label: "和モダン",
        prompt: "A refined Japanese modern interior featuring tatami floors, shoji screens, natural wood elements, minimalist zen aesthetic, built-in storage, paper lantern lighting, indoor garden views, and contemporary Japanese furniture",
        negative_prompt: "western style, damaged, dark, old, low quality, cluttered, colorful",
    },
    StyleEntry {
        id: "western",
        label: "洋風",
        prompt: "A luxurious Western-style interior with hardwood flooring, crown molding, elegant furniture, crystal chandelier, marble accents, rich color scheme, formal dining area, and classic American or European design elements",
        negative_prompt: "japanese style, old, damaged, dark, low quality, minimalist, modern",
    },
    StyleEntry {
        id: "scandinavian",
        label: "北欧風",
        prompt: "A cozy Scandinavian interior with white walls, light oak floors, hygge atmosphere, natural textiles, minimalist furniture, abundant natural light, indoor plants, warm throw blankets, and Nordic design elements",
        negative_prompt: "dark, cluttered, damaged, old, low quality, ornate, colorful",
    },
    StyleEntry {
        id: "industrial",
        label: "インダストリアル",
        prompt: "An industrial loft interior with exposed concrete walls, metal beams, Edison bulb lighting, vintage leather furniture, steel fixtures, open ductwork, large factory-style windows, and raw wood accents",
        negative_prompt: "fancy, ornate, traditional, carpeted, closed spaces",
    },
    StyleEntry {
        id: "zen",
        label: "ミニマリスト禅",
        prompt: "A serene minimalist zen interior with white walls, natural stone elements, bamboo accents, floor cushions, low wooden tables, indirect lighting, empty space as design element, and a small indoor rock garden",
        negative_prompt: "cluttered, colorful, busy patterns, western furniture",
    },
    StyleEntry {
        id: "showa",
        label: "昭和レトロ",
        prompt: "A nostalgic Showa-era interior with wood paneling, vintage Japanese furniture, retro appliances, warm lighting, traditional kotatsu table, classic posters, and period-appropriate color scheme",
        negative_prompt: "modern, minimalist, high-tech, western style",
    },
    StyleEntry {
        id: "luxury",
        label: "ラグジュアリー",
        prompt: "A luxury hotel-style interior with plush carpeting, elegant furniture, marble accents, designer lighting fixtures, rich textures, sophisticated color palette, and premium finishes throughout",
        negative_prompt: "cheap, simple, rustic, industrial, DIY",
    },
    StyleEntry {
        id: "eco",
        label: "エコナチュラル",
        prompt: "A sustainable eco-friendly interior with reclaimed wood, living walls, natural fiber furniture, solar tube lighting, cork flooring, recycled materials, and abundant greenery",
        negative_prompt: "synthetic, plastic, artificial lighting, non-sustainable",
    },
    StyleEntry {
        id: "mediterranean",
        label: "地中海風",
        prompt: "A Mediterranean coastal interior with white stucco walls, terracotta tiles, arched doorways, wrought iron details, blue accents, natural wood beams, and sun-drenched atmosphere",
        negative_prompt: "dark, industrial, modern, Japanese traditional",
    },
    StyleEntry {
        id: "smart",
        label: "スマートホーム",
        prompt: "A futuristic smart home interior with integrated LED panels, voice-controlled lighting, minimalist tech furniture, hidden screens, automated systems, and seamless technology integration",
        negative_prompt: "traditional, vintage, rustic, manual controls",
    },
    StyleEntry {
        id: "bohemian",
        label: "ボヘミアン",
        prompt: "A bohemian eclectic interior with layered textiles, macrame wall art, vintage rugs, mixed patterns, indoor plants, warm earth tones, floor cushions, and artistic decorative elements",
        negative_prompt: "minimal, modern, structured, monochrome",
    },
];

pub fn find_style(id: &str) -> Option<&'static StyleEntry> {
    STYLES.iter().find(|s| s.id == id)
}

/// Look up a style, failing with a validation error for unknown ids.
pub fn validate_style(id: &str) -> Result<&'static StyleEntry, CoreError> {
    find_style(id).ok_or_else(|| CoreError::Validation(format!("Invalid style '{id}'")))
}
