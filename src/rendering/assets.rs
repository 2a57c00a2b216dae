//! Piece asset loading and caching
//!
//! Piece artwork is looked up by `(Role, Color)` and loaded at most once per
//! key. Asset files are named `<color>-<piece>`, for example `white-knight`
//! or `black-pawn`.
//!
//! # Loaders
//!
//! - [`GlyphLoader`]: text glyphs for the terminal renderer. A file
//!   `<dir>/<color>-<piece>.txt` overrides the built-in Unicode glyph; its
//!   first non-empty line is used.
//!
//! Other front ends plug in their own [`AssetLoader`] (images, sprites) and
//! reuse [`AssetCache`] unchanged.

use shakmaty::{Color, Role};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Loads the artwork for one piece kind
pub trait AssetLoader {
    type Asset;

    /// Load the asset for `role` and `color`; must not fail, fall back instead
    fn load(&mut self, role: Role, color: Color) -> Self::Asset;
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

pub fn role_name(role: Role) -> &'static str {
    match role {
        Role::Pawn => "pawn",
        Role::Knight => "knight",
        Role::Bishop => "bishop",
        Role::Rook => "rook",
        Role::Queen => "queen",
        Role::King => "king",
    }
}

/// File stem of the asset for a piece, e.g. `white-queen`
pub fn asset_name(role: Role, color: Color) -> String {
    format!("{}-{}", color_name(color), role_name(role))
}

/// Cache that loads each `(Role, Color)` asset once
pub struct AssetCache<L: AssetLoader> {
    loader: L,
    cache: HashMap<(Role, Color), L::Asset>,
}

impl<L: AssetLoader> AssetCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            cache: HashMap::new(),
        }
    }

    /// Asset for a piece, loading it on first use
    pub fn get(&mut self, role: Role, color: Color) -> &L::Asset {
        let loader = &mut self.loader;
        self.cache
            .entry((role, color))
            .or_insert_with(|| loader.load(role, color))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

/// Built-in Unicode glyph for a piece
pub fn unicode_glyph(role: Role, color: Color) -> char {
    match (color, role) {
        (Color::White, Role::King) => '♔',
        (Color::White, Role::Queen) => '♕',
        (Color::White, Role::Rook) => '♖',
        (Color::White, Role::Bishop) => '♗',
        (Color::White, Role::Knight) => '♘',
        (Color::White, Role::Pawn) => '♙',
        (Color::Black, Role::King) => '♚',
        (Color::Black, Role::Queen) => '♛',
        (Color::Black, Role::Rook) => '♜',
        (Color::Black, Role::Bishop) => '♝',
        (Color::Black, Role::Knight) => '♞',
        (Color::Black, Role::Pawn) => '♟',
    }
}

/// Text glyph loader with optional per-piece override files
#[derive(Debug, Default)]
pub struct GlyphLoader {
    dir: Option<PathBuf>,
    loads: usize,
}

impl GlyphLoader {
    /// Loader that reads overrides from `dir`, if given
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir, loads: 0 }
    }

    /// Number of times `load` has been called
    pub fn loads(&self) -> usize {
        self.loads
    }

    fn read_override(&self, name: &str) -> Option<String> {
        let path = self.dir.as_ref()?.join(format!("{}.txt", name));
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let glyph = contents.lines().map(str::trim).find(|l| !l.is_empty())?;
                debug!("[ASSETS] Loaded glyph override {}", path.display());
                Some(glyph.to_string())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("[ASSETS] Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl AssetLoader for GlyphLoader {
    type Asset = String;

    fn load(&mut self, role: Role, color: Color) -> String {
        self.loads += 1;
        let name = asset_name(role, color);
        self.read_override(&name)
            .unwrap_or_else(|| unicode_glyph(role, color).to_string())
    }
}
