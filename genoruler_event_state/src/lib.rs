// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Genoruler Event State: headless pointer state for the ruler.
//!
//! - [`drag`]: [`DragState`](drag::DragState) turns successive pointer
//!   positions into movement deltas.
//! - [`interaction`]: [`RulerInteraction`](interaction::RulerInteraction)
//!   is the `Idle`/`Dragging` machine that turns pointer and wheel input into
//!   [`RulerGesture`](interaction::RulerGesture)s and a cursor hint.
//!
//! Nothing here knows about genomic coordinates. Callers apply the returned
//! gestures to a viewport themselves.

#![no_std]

pub mod drag;
pub mod interaction;
