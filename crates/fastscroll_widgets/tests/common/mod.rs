//! Recording fake hosts shared by the integration tests

#![allow(dead_code)]

use std::time::{Duration, Instant};

use fastscroll_widgets::prelude::*;

/// Every call a fake host received from the scroller
#[derive(Debug, Default)]
pub struct HostLog {
    pub redraws: usize,
    pub next_frames: usize,
    pub posted: Vec<(TickId, Duration)>,
    pub cancelled: Vec<TickId>,
    pub intercepts: usize,
    pub native_scrollbar: Vec<bool>,
}

impl HostLog {
    pub fn last_posted(&self) -> Option<TickId> {
        self.posted.last().map(|(id, _)| *id)
    }
}

macro_rules! recording_host_view {
    ($fake:ident) => {
        impl HostView for $fake {
            fn view_size(&self) -> Size {
                self.view
            }

            fn request_redraw(&mut self) {
                self.log.redraws += 1;
            }

            fn request_redraw_next_frame(&mut self) {
                self.log.next_frames += 1;
            }

            fn post_tick(&mut self, tick: TickId, delay: Duration) {
                self.log.posted.push((tick, delay));
            }

            fn cancel_tick(&mut self, tick: TickId) {
                self.log.cancelled.push(tick);
            }

            fn intercept_gesture(&mut self) {
                self.log.intercepts += 1;
            }

            fn set_native_scrollbar_enabled(&mut self, enabled: bool) {
                self.log.native_scrollbar.push(enabled);
            }
        }
    };
}

/// An item-recycling list with a fixed number of visible rows
#[derive(Debug)]
pub struct FakeItemList {
    pub view: Size,
    pub count: usize,
    pub visible: usize,
    pub first: usize,
    pub selections: Vec<usize>,
    pub log: HostLog,
}

impl FakeItemList {
    pub fn new(count: usize, visible: usize, view_height: f32) -> Self {
        Self {
            view: Size::new(400.0, view_height),
            count,
            visible,
            first: 0,
            selections: Vec::new(),
            log: HostLog::default(),
        }
    }
}

recording_host_view!(FakeItemList);

impl ItemList for FakeItemList {
    fn count(&self) -> usize {
        self.count
    }

    fn child_count(&self) -> usize {
        self.visible
    }

    fn first_visible_position(&self) -> usize {
        self.first
    }

    fn set_selection(&mut self, position: usize) {
        self.selections.push(position);
        self.first = position;
    }
}

/// A layout-manager list with pixel metrics
#[derive(Debug)]
pub struct FakeLayoutList {
    pub view: Size,
    pub item_count: usize,
    pub visible: usize,
    pub range: f32,
    pub offset: f32,
    pub jumps: Vec<usize>,
    pub log: HostLog,
}

impl FakeLayoutList {
    pub fn new(item_count: usize, visible: usize, range: f32, view_height: f32) -> Self {
        Self {
            view: Size::new(400.0, view_height),
            item_count,
            visible,
            range,
            offset: 0.0,
            jumps: Vec::new(),
            log: HostLog::default(),
        }
    }
}

recording_host_view!(FakeLayoutList);

impl LayoutList for FakeLayoutList {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn child_count(&self) -> usize {
        self.visible
    }

    fn first_visible_position(&self) -> usize {
        let scrollable = self.range - self.view.height;
        if scrollable <= 0.0 || self.item_count == 0 {
            return 0;
        }
        let fraction = (self.offset / scrollable).clamp(0.0, 1.0);
        (fraction * (self.item_count - 1) as f32) as usize
    }

    fn vertical_scroll_range(&self) -> f32 {
        self.range
    }

    fn vertical_scroll_extent(&self) -> f32 {
        self.view.height
    }

    fn vertical_scroll_offset(&self) -> f32 {
        self.offset
    }

    fn scroll_to_position_with_offset(&mut self, position: usize, _offset: f32) {
        self.jumps.push(position);
    }

    fn scroll_by(&mut self, dy: f32) {
        self.offset += dy;
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// A scroller over a 1000-item list whose overlay was just woken at `t0`
pub fn awake_item_list(
    config: FastScrollConfig,
    t0: Instant,
) -> (FastScroller, ItemListAdapter<FakeItemList>) {
    let mut host = ItemListAdapter::new(FakeItemList::new(1000, 20, 2000.0));
    let mut scroller = FastScroller::new(config).unwrap();
    scroller.on_host_scrolled(&mut host, t0);
    (scroller, host)
}
