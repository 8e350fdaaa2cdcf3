//! JSON-file snapshot store for the tabletop campaign manager.

pub mod json_file_repository;
