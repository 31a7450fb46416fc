#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use sw_reflect as reflect;
pub use sw_utils as utils;

pub use sw_reflect::access::{field_list, field_value, getter_list, getter_value};
pub use sw_reflect::access::{field_value_mut, set_field_value, try_set_field_value};
