mod create;
mod lookup;
mod update_replace;
