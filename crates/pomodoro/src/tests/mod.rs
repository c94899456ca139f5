mod debounce;
mod phase;
