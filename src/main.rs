fn main() -> anyhow::Result<()> {
    atlas_slicer::run()
}
