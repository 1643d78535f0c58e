// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete tag helpers.
//!
//! Each helper owns a [`HelperDescriptor`](crate::descriptor::HelperDescriptor)
//! and a pure transformation; [`HelperFactory`] builds them by id from
//! configuration.

pub mod assets;
pub mod conditional_class;
pub mod excerpt;
pub mod factory;
pub mod json_ld;
pub mod lazy_image;
pub mod relative_time;
pub mod render_gate;
pub mod resource_hint;
pub mod scroll_reveal;
pub mod seo_meta;
pub mod virtual_scroll;
pub mod widget;

#[cfg(test)]
pub mod stub;

pub use conditional_class::ConditionalClassHelper;
pub use excerpt::ExcerptHelper;
pub use factory::HelperFactory;
pub use json_ld::JsonLdHelper;
pub use lazy_image::LazyImageHelper;
pub use relative_time::RelativeTimeHelper;
pub use render_gate::RenderGateHelper;
pub use resource_hint::ResourceHintHelper;
pub use scroll_reveal::ScrollRevealHelper;
pub use seo_meta::SeoMetaHelper;
pub use virtual_scroll::VirtualScrollHelper;
pub use widget::WidgetHelper;
