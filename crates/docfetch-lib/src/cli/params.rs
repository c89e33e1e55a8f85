use crate::config::PackageDescriptor;
use crate::fetch::FetchOptions;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub packages: Vec<PackageDescriptor>,
    pub base_dir: PathBuf,
    pub options: FetchOptions,
}

#[derive(Debug, Clone)]
pub struct CleanParams {
    pub packages: Vec<PackageDescriptor>,
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ListParams {
    pub packages: Vec<PackageDescriptor>,
}
