pub mod loot_commands;
