fn main() -> anyhow::Result<()> {
    sprite_tools::run()
}
