//! Workspace-level integration tests for VibeCoder live in `tests/`.
