use std::env;
use std::fs;

use foundation::extent::{Extent, Viewport};
use runtime::frame::Frame;
use sequencer::{SectionSequencer, SequencerConfig, SequencerEvent};
use serde::Deserialize;

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "usage: waggle <config.json> [trace.json]\n\
     \n\
     Replays a scroll trace against a region configuration and prints the\n\
     resulting event log and metrics. Without a trace file, a built-in\n\
     down-and-back sweep over the configured regions is used."
        .to_string()
}

fn real_main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        return Err(usage());
    }

    let config_text =
        fs::read_to_string(&args[1]).map_err(|e| format!("read {}: {e}", args[1]))?;
    let config = SequencerConfig::from_json(&config_text).map_err(|e| e.to_string())?;

    let trace = match args.get(2) {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| format!("read {path}: {e}"))?;
            serde_json::from_str(&text).map_err(|e| format!("parse {path}: {e}"))?
        }
        None => demo_trace(&config),
    };

    replay(&config, &trace)
}

#[derive(Debug, Deserialize)]
struct Trace {
    #[serde(default = "default_viewport_height")]
    viewport_height: f64,
    /// Milliseconds per frame.
    #[serde(default = "default_dt_ms")]
    dt_ms: u64,
    #[serde(default)]
    anchors: Vec<AnchorEntry>,
    frames: Vec<TraceFrame>,
}

#[derive(Debug, Deserialize)]
struct AnchorEntry {
    region: String,
    top: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
struct TraceFrame {
    /// Raw scroll offsets delivered during this frame, in order.
    #[serde(default)]
    scroll: Vec<f64>,
}

fn default_viewport_height() -> f64 {
    800.0
}

fn default_dt_ms() -> u64 {
    16
}

/// A down-and-back sweep over the configured regions, stacked one viewport
/// tall each in document order.
fn demo_trace(config: &SequencerConfig) -> Trace {
    let vh = default_viewport_height();
    let anchors = config
        .regions
        .iter()
        .enumerate()
        .map(|(i, r)| AnchorEntry {
            region: r.id.clone(),
            top: i as f64 * vh,
            height: vh,
        })
        .collect();

    let bottom = (config.regions.len().saturating_sub(1)) as f64 * vh;
    let step = 100.0;
    let mut offsets = Vec::new();
    let mut y = 0.0;
    while y < bottom {
        y += step;
        offsets.push(y.min(bottom));
    }
    while y > 0.0 {
        y -= step;
        offsets.push(y.max(0.0));
    }

    Trace {
        viewport_height: vh,
        dt_ms: default_dt_ms(),
        anchors,
        frames: offsets
            .into_iter()
            .map(|o| TraceFrame { scroll: vec![o] })
            .collect(),
    }
}

fn replay(config: &SequencerConfig, trace: &Trace) -> Result<(), String> {
    let viewport = Viewport::new(0.0, trace.viewport_height);
    let mut seq = SectionSequencer::new(config, viewport).map_err(|e| e.to_string())?;

    for anchor in &trace.anchors {
        if !seq.set_anchor(&anchor.region, Extent::new(anchor.top, anchor.height)) {
            return Err(format!("anchor for unknown region: {}", anchor.region));
        }
    }

    // Every configured effect gets a no-op action so firings show up in the
    // event log instead of being skipped as unbound.
    for region in &config.regions {
        for effect in &region.effects {
            seq.register_action(effect.id.clone(), Box::new(|_| Ok(())));
        }
    }

    // A zero dt would stall engine time and staged effects would never
    // drain below.
    let dt_s = trace.dt_ms.max(1) as f64 / 1000.0;
    let mut frame = Frame::new(0, dt_s);
    for step in &trace.frames {
        for &offset in &step.scroll {
            seq.scroll(offset);
        }
        seq.advance(frame);
        frame = frame.next();
    }

    // Let staged effects past the end of the trace drain.
    while seq.pending_effects() > 0 {
        seq.advance(frame);
        frame = frame.next();
    }

    for event in seq.drain_events() {
        println!("[{:>5}] {}", event.frame_index, describe(&event.kind));
    }

    let snapshot = seq.metrics().snapshot();
    println!();
    for (name, value) in &snapshot.counters {
        println!("{name} = {value}");
    }

    Ok(())
}

fn describe(event: &SequencerEvent) -> String {
    match event {
        SequencerEvent::RegionEntered { region, direction } => {
            format!("enter  {region} ({direction:?})")
        }
        SequencerEvent::RegionExited { region } => format!("exit   {region}"),
        SequencerEvent::EffectScheduled { region, effect, due } => {
            format!("stage  {region}/{effect} due {:.0}ms", due.as_millis())
        }
        SequencerEvent::EffectFired { region, effect } => format!("fire   {region}/{effect}"),
        SequencerEvent::EffectFailed {
            region,
            effect,
            error,
        } => format!("fail   {region}/{effect}: {error}"),
        SequencerEvent::EffectSkipped {
            region,
            effect,
            reason,
        } => format!("skip   {region}/{effect} ({reason:?})"),
        SequencerEvent::AnchorMissing { region } => format!("noanch {region}"),
        SequencerEvent::NavChanged { active } => match active {
            Some(region) => format!("nav    {region}"),
            None => "nav    (none)".to_string(),
        },
    }
}
