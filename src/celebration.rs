//! Celebration - confetti burst and the keyframes the dice boards animate with
//!
//! Each piece is a plain div driven by a CSS keyframe animation; fall distance,
//! sway and spin are passed in through custom properties so one keyframe set
//! covers every piece.

use rand::Rng;

const CONFETTI_COLORS: &[&str] = &[
    "#f43f5e", "#ec4899", "#a855f7", "#6366f1", "#3b82f6",
    "#06b6d4", "#10b981", "#84cc16", "#eab308", "#f97316",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceShape {
    Square,
    Strip,
    Dot,
}

impl PieceShape {
    const ALL: &[Self] = &[Self::Square, Self::Strip, Self::Dot];

    fn dimensions(&self, size: f32) -> (f32, f32) {
        match self {
            Self::Square => (size, size),
            Self::Strip => (size * 0.4, size * 1.6),
            Self::Dot => (size, size),
        }
    }

    fn radius(&self) -> &'static str {
        match self {
            Self::Dot => "50%",
            _ => "2px",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal start, percent of viewport width
    pub left_pct: f32,
    pub size: f32,
    pub delay_ms: u32,
    pub fall_ms: u32,
    /// Horizontal sway in px (negative drifts left)
    pub sway: f32,
    pub spin_deg: f32,
    pub color: &'static str,
    pub shape: PieceShape,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, window_ms: u32) -> Self {
        let window_ms = window_ms.max(600);
        let upper = (u64::from(window_ms) * 4 / 5) as u32;
        let fall_ms = rng.random_range(window_ms / 2..=upper);
        Self {
            left_pct: rng.random_range(0.0..100.0),
            size: rng.random_range(6.0..12.0),
            delay_ms: rng.random_range(0..=window_ms - fall_ms),
            fall_ms,
            sway: rng.random_range(-120.0..120.0),
            spin_deg: rng.random_range(180.0..1080.0),
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            shape: PieceShape::ALL[rng.random_range(0..PieceShape::ALL.len())],
        }
    }

    pub fn to_css(&self) -> String {
        let (w, h) = self.shape.dimensions(self.size);
        format!(
            "position: absolute; top: -20px; left: {:.2}%; width: {:.1}px; height: {:.1}px; \
             background: {}; border-radius: {}; opacity: 0; \
             --sway: {:.0}px; --spin: {:.0}deg; \
             animation: confetti-fall {}ms {}ms ease-in forwards;",
            self.left_pct,
            w,
            h,
            self.color,
            self.shape.radius(),
            self.sway,
            self.spin_deg,
            self.fall_ms,
            self.delay_ms,
        )
    }
}

/// One burst, shown for `duration_ms` after a roll settles
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub id: u64,
    pub duration_ms: u32,
    pub pieces: Vec<ConfettiPiece>,
}

impl Celebration {
    pub fn burst<R: Rng + ?Sized>(rng: &mut R, id: u64, count: usize, duration_ms: u32) -> Self {
        let pieces = (0..count)
            .map(|_| ConfettiPiece::random(rng, duration_ms))
            .collect();
        Self { id, duration_ms, pieces }
    }
}

/// All @keyframes definitions - inject once as a <style> block
pub fn keyframes_css() -> &'static str {
    r#"
@keyframes confetti-fall {
  0%   { opacity: 1; transform: translate(0, 0) rotate(0deg); }
  85%  { opacity: 1; }
  100% { opacity: 0; transform: translate(var(--sway), 105vh) rotate(var(--spin)); }
}
@keyframes dice-spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
@keyframes result-pop { 0% { transform: scale(0.8); opacity: 0; } 100% { transform: scale(1); opacity: 1; } }
@keyframes result-float { 0%,100% { transform: translateY(0); } 50% { transform: translateY(-6px); } }
@keyframes blob {
  0%,100% { transform: translate(0, 0) scale(1); }
  33%     { transform: translate(30px, -50px) scale(1.1); }
  66%     { transform: translate(-20px, 20px) scale(0.9); }
}
@keyframes choice-in { from { transform: translateX(-20px); opacity: 0; } to { transform: translateX(0); opacity: 1; } }
"#
}

pub fn spinning_die_css(rolling: bool) -> &'static str {
    if rolling {
        "display: inline-block; animation: dice-spin 1s infinite linear;"
    } else {
        "display: inline-block;"
    }
}
