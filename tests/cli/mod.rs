mod catalog;
mod favorites;
mod logging;
mod search;
mod support;
