//! Pure game logic for HiveQuest.
//!
//! This crate contains all core logic for the hive exploration game,
//! independent of any engine, renderer, or runtime. The host owns the
//! camera, input capture, asset loading, and presentation. Each frame it
//! feeds the player's position into [`session::HiveSession::tick`] and
//! realizes whatever the report tells it: new wall meshes to instantiate,
//! the goal model to load, the win state to present.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Host-facing configuration, expansion rules, validation |
//! | [`constants`] | Reference tuning values for the shipped hive |
//! | [`containment`] | Nearest-room boundary resolution and height clamp |
//! | [`expansion`] | Rule-driven synchronous room-graph growth |
//! | [`geometry`] | Hex wall placement, bearings, angle normalization |
//! | [`movement`] | Damped planar kinematics from a move intent |
//! | [`rooms`] | Hex rooms and the append-only room arena |
//! | [`session`] | Tick orchestration and one-shot progression flags |

pub mod config;
pub mod constants;
pub mod containment;
pub mod expansion;
pub mod geometry;
pub mod movement;
pub mod rooms;
pub mod session;
