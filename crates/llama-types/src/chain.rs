/// Key under which DefiLlama files a chain inside fee breakdowns,
/// e.g. `"Arbitrum"` -> `"arbitrum"`, `"Polygon zkEVM"` -> `"polygon_zkevm"`.
pub fn chain_key(chain: &str) -> String {
    chain.trim().to_lowercase().replace(' ', "_")
}
