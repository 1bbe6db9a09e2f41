//! Member join handler that provisions private onboarding channels.
//!
//! Every `guild_member_addition` event gets a private text channel named
//! after the joining member, visible only to that member and the operator.
//! All side effects here are best-effort: a duplicate channel name, a missing
//! permission, or an API outage is logged and swallowed, the member simply
//! ends up without a private channel and nothing retries.

use serenity::all::{
    ChannelType, Context, CreateChannel, Member, PermissionOverwrite, PermissionOverwriteType,
    Permissions, RoleId, UserId,
};

use crate::util::parse::{channel_name_from_display_name, parse_u64_from_string};

/// Fixed instructional message posted into every onboarding channel.
const WELCOME_MESSAGE: &str = "Welcome to the server! This is your private onboarding channel. \
    Please introduce yourself and tell us who invited you so they can receive credit. \
    A moderator will verify you shortly.";

/// Handles the guild_member_addition event when a member joins a guild.
///
/// Derives the channel name from the member's display name (lowercased,
/// stripped to `[a-z0-9-]`), creates a private channel restricted to the
/// member and the operator, and posts the welcome message.
///
/// # Arguments
/// - `operator_id` - Configured operator identity, granted access to the channel
/// - `ctx` - Discord context for channel creation
/// - `new_member` - The member who joined
pub async fn handle_guild_member_addition(operator_id: &str, ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id;

    let operator = match parse_u64_from_string(operator_id) {
        Ok(id) => UserId::new(id),
        Err(e) => {
            tracing::error!("Invalid operator id in configuration: {:?}", e);
            return;
        }
    };

    let channel_name = channel_name_from_display_name(new_member.display_name());

    // Visible to the joining member and the operator only. The @everyone
    // role shares its id with the guild.
    let permissions = vec![
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(new_member.user.id),
        },
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(operator),
        },
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        },
    ];

    let builder = CreateChannel::new(&channel_name)
        .kind(ChannelType::Text)
        .permissions(permissions);

    let channel = match guild_id.create_channel(&ctx.http, builder).await {
        Ok(channel) => channel,
        Err(e) => {
            tracing::error!(
                "Failed to create onboarding channel '{}' in guild {}: {:?}",
                channel_name,
                guild_id,
                e
            );
            return;
        }
    };

    if let Err(e) = channel.say(&ctx.http, WELCOME_MESSAGE).await {
        tracing::error!(
            "Failed to post welcome message in #{}: {:?}",
            channel.name,
            e
        );
    } else {
        tracing::info!(
            "Created onboarding channel #{} for {} in guild {}",
            channel.name,
            new_member.user.name,
            guild_id
        );
    }
}
