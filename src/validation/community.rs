use super::error::{CommunityFault, CommunitySection, Error, Result, SectionFault};

/// Validates the communities attached to one advertisement.
///
/// Communities must be unique and each must be two `u16` sections joined by `:`.
pub fn validate_communities(communities: &[String]) -> Result<()> {
    log::trace!("Validating {} communities", communities.len());

    for (i, community) in communities.iter().enumerate() {
        if communities[i + 1..].contains(community) {
            return Err(Error::DuplicateCommunity(community.clone()));
        }
    }

    for community in communities {
        parse_community(community).map_err(|fault| Error::MalformedCommunity {
            community: community.clone(),
            fault,
        })?;
    }

    Ok(())
}

/// Parse an `asn:value` community string
fn parse_community(community: &str) -> std::result::Result<(u16, u16), CommunityFault> {
    let sections: Vec<&str> = community.split(':').collect();
    let &[first, second] = sections.as_slice() else {
        return Err(CommunityFault::SectionCount(sections.len()));
    };

    let parse_section = |section, value: &str| {
        // `u16::from_str` also takes a leading `+`
        let parsed = if value.bytes().all(|byte| byte.is_ascii_digit()) {
            value.parse::<u16>().map_err(SectionFault::from)
        } else {
            Err(SectionFault::NotDigits)
        };
        parsed.map_err(|source| CommunityFault::InvalidSection {
            section,
            value: value.to_owned(),
            source,
        })
    };

    Ok((
        parse_section(CommunitySection::First, first)?,
        parse_section(CommunitySection::Second, second)?,
    ))
}
