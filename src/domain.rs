//! Domain logic
//!
//! This module contains the page's domain types and pure rules:
//! - Testimonial records and the carousel's display slots
//! - Cursor arithmetic and swipe gesture interpretation
//! - FAQ entries and section navigation
//! - Text measurement for the marquee track

pub mod carousel;
pub mod faq;
pub mod gesture;
pub mod navigation;
pub mod testimonial;
pub mod text;
