mod cli;
mod decode_to_snapshot;
