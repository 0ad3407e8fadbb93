use bevy::prelude::*;

use crate::engine::assets::showcase_manifest::RevealTiming;

/// One-shot actions emitted by the reveal timeline, in firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealCue {
    HideLoader,
    BeginOverlayFade,
    RevealMeshes,
    OpenPanel,
}

impl RevealCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealCue::HideLoader => "hide_loader",
            RevealCue::BeginOverlayFade => "begin_overlay_fade",
            RevealCue::RevealMeshes => "reveal_meshes",
            RevealCue::OpenPanel => "open_panel",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    /// Waiting for asset completion.
    #[default]
    Idle,
    /// Loader hidden and fade running.
    Started,
    MeshesRevealed,
    Complete,
}

/// Delayed scalar animation from 0 to 1 with quadratic ease-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub delay: f32,
    pub duration: f32,
}

impl Tween {
    pub fn new(delay: f32, duration: f32) -> Self {
        Self {
            delay: delay.max(0.0),
            duration: duration.max(0.0),
        }
    }

    /// Linear progress in `[0, 1]` at `elapsed` seconds after start.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if elapsed <= self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, elapsed: f32) -> f32 {
        ease_out_quad(self.progress(elapsed))
    }

    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }
}

pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Reveal timeline anchored to asset completion.
///
/// Every cue fires at most once and only after its predecessor. Mesh reveal
/// additionally waits until all bundle parts exist, so a slow bundle delays
/// the reveal rather than skipping it.
#[derive(Resource, Debug, Clone)]
pub struct RevealSequencer {
    timing: RevealTiming,
    phase: RevealPhase,
    elapsed: f32,
    fade: Tween,
    fresh_start: bool,
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new(RevealTiming::default())
    }
}

impl RevealSequencer {
    pub fn new(timing: RevealTiming) -> Self {
        Self {
            timing,
            phase: RevealPhase::Idle,
            elapsed: 0.0,
            fade: Tween::new(timing.overlay_fade_delay, timing.overlay_fade_duration),
            fresh_start: false,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Seconds since `start`.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_started(&self) -> bool {
        self.phase != RevealPhase::Idle
    }

    /// Anchors the timeline. Only the first call emits cues.
    pub fn start(&mut self) -> Vec<RevealCue> {
        if self.phase != RevealPhase::Idle {
            return Vec::new();
        }
        self.phase = RevealPhase::Started;
        self.elapsed = 0.0;
        self.fresh_start = true;
        vec![RevealCue::HideLoader, RevealCue::BeginOverlayFade]
    }

    /// True once, right after `start`. The frame that anchored the timeline
    /// must not also count its delta.
    pub fn take_fresh_start(&mut self) -> bool {
        std::mem::take(&mut self.fresh_start)
    }

    /// Moves the timeline forward and returns the cues that became due.
    pub fn advance(&mut self, delta_secs: f32, meshes_ready: bool) -> Vec<RevealCue> {
        if self.phase == RevealPhase::Idle {
            return Vec::new();
        }
        self.elapsed += delta_secs.max(0.0);

        let mut cues = Vec::new();
        if self.phase == RevealPhase::Started
            && meshes_ready
            && self.elapsed >= self.timing.reveal_meshes_after
        {
            self.phase = RevealPhase::MeshesRevealed;
            cues.push(RevealCue::RevealMeshes);
        }
        if self.phase == RevealPhase::MeshesRevealed
            && self.elapsed >= self.timing.open_panel_after
        {
            self.phase = RevealPhase::Complete;
            cues.push(RevealCue::OpenPanel);
        }
        cues
    }

    /// Overlay opacity: fully opaque until start, then fading out.
    pub fn overlay_alpha(&self) -> f32 {
        match self.phase {
            RevealPhase::Idle => 1.0,
            _ => 1.0 - self.fade.sample(self.elapsed),
        }
    }

    pub fn fade_finished(&self) -> bool {
        self.is_started() && self.elapsed >= self.fade.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(sequencer: &mut RevealSequencer, steps: usize, meshes_ready: bool) -> Vec<(f32, RevealCue)> {
        let mut fired = Vec::new();
        for _ in 0..steps {
            for cue in sequencer.advance(0.25, meshes_ready) {
                fired.push((sequencer.elapsed(), cue));
            }
        }
        fired
    }

    #[test]
    fn test_start_emits_loader_and_fade_once() {
        let mut sequencer = RevealSequencer::default();
        assert_eq!(
            sequencer.start(),
            vec![RevealCue::HideLoader, RevealCue::BeginOverlayFade]
        );
        assert!(sequencer.start().is_empty());
    }

    #[test]
    fn test_fresh_start_is_reported_once() {
        let mut sequencer = RevealSequencer::default();
        assert!(!sequencer.take_fresh_start());

        sequencer.start();
        assert!(sequencer.take_fresh_start());
        assert!(!sequencer.take_fresh_start());

        sequencer.start();
        assert!(!sequencer.take_fresh_start());
    }

    #[test]
    fn test_nothing_fires_before_start() {
        let mut sequencer = RevealSequencer::default();
        assert!(run(&mut sequencer, 20, true).is_empty());
        assert_eq!(sequencer.phase(), RevealPhase::Idle);
        assert_eq!(sequencer.overlay_alpha(), 1.0);
    }

    #[test]
    fn test_default_timeline() {
        let mut sequencer = RevealSequencer::default();
        sequencer.start();

        let fired = run(&mut sequencer, 12, true);
        assert_eq!(
            fired,
            vec![(0.5, RevealCue::RevealMeshes), (2.0, RevealCue::OpenPanel)]
        );
        assert_eq!(sequencer.phase(), RevealPhase::Complete);
        assert_eq!(sequencer.overlay_alpha(), 0.0);
    }

    #[test]
    fn test_overlay_stays_opaque_through_delay() {
        let mut sequencer = RevealSequencer::default();
        sequencer.start();
        run(&mut sequencer, 2, true);
        assert_eq!(sequencer.overlay_alpha(), 1.0);

        run(&mut sequencer, 1, true);
        let alpha = sequencer.overlay_alpha();
        assert!(alpha > 0.0 && alpha < 1.0);
        assert!(!sequencer.fade_finished());
    }

    #[test]
    fn test_mesh_reveal_waits_for_parts() {
        let mut sequencer = RevealSequencer::default();
        sequencer.start();

        assert!(run(&mut sequencer, 12, false).is_empty());
        assert_eq!(sequencer.phase(), RevealPhase::Started);

        // Both cues are overdue, so they fire together in chain order.
        assert_eq!(
            sequencer.advance(0.25, true),
            vec![RevealCue::RevealMeshes, RevealCue::OpenPanel]
        );
    }

    #[test]
    fn test_cues_never_repeat() {
        let mut sequencer = RevealSequencer::default();
        sequencer.start();
        run(&mut sequencer, 12, true);
        assert!(run(&mut sequencer, 40, true).is_empty());
        assert!(sequencer.start().is_empty());
    }

    #[test]
    fn test_custom_timing() {
        let mut sequencer = RevealSequencer::new(RevealTiming {
            overlay_fade_delay: 0.0,
            overlay_fade_duration: 1.0,
            reveal_meshes_after: 0.25,
            open_panel_after: 1.0,
        });
        sequencer.start();
        let fired = run(&mut sequencer, 4, true);
        assert_eq!(
            fired,
            vec![(0.25, RevealCue::RevealMeshes), (1.0, RevealCue::OpenPanel)]
        );
    }

    #[test]
    fn test_tween_sampling() {
        let tween = Tween::new(0.5, 1.5);
        assert_eq!(tween.sample(0.0), 0.0);
        assert_eq!(tween.sample(0.5), 0.0);
        assert_eq!(tween.sample(2.0), 1.0);
        assert_eq!(tween.sample(10.0), 1.0);
        assert!((tween.sample(1.25) - 0.75).abs() < 1e-6);
        assert_eq!(tween.end(), 2.0);

        let instant = Tween::new(0.0, 0.0);
        assert_eq!(instant.sample(0.1), 1.0);
    }
}
