// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Events: pointer event model and listener bookkeeping.
//!
//! This crate provides the two event-plumbing pieces the drag layer needs:
//!
//! - [`PointerEvent`]: a polymorphic pointer event covering the mouse and
//!   touch variants of press, move, and release. A single
//!   [`PointerEvent::position`] accessor resolves the right coordinates for
//!   the event kind, so consumers never branch on mouse-vs-touch themselves.
//! - [`ListenerTable`]: a registry of `(target, kind)` subscriptions with
//!   stable [`ListenerId`] handles. Registration order is preserved (FIFO)
//!   and removal is exact by id, so tearing one binding down never disturbs
//!   unrelated registrations on other targets.
//!
//! The crate does not dispatch anything itself; it is bookkeeping shared by
//! binders and hosts. Targets are generic over an application node key `K`
//! (for example a generational id from `tether_scene`), with
//! [`Target::Window`] standing in for the global window scope.
//!
//! ## Minimal example
//!
//! ```rust
//! use tether_events::{ListenerTable, PointerKind, Target};
//!
//! let mut table: ListenerTable<u32> = ListenerTable::new();
//! let down = table.subscribe(Target::Node(7), PointerKind::MouseDown);
//! table.subscribe(Target::Window, PointerKind::MouseMove);
//!
//! assert_eq!(table.count_for(Target::Node(7), PointerKind::MouseDown), 1);
//! assert!(table.unsubscribe(down));
//! assert!(!table.unsubscribe(down)); // exact removal; stale ids are no-ops
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod pointer;
mod table;

pub use pointer::{PointerEvent, PointerKind};
pub use table::{ListenerId, ListenerTable, Target};
