mod common;
mod navigation;
