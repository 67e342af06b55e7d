//! Testing utilities for the org hierarchy workspace
//!
//! Raw payload builders, canned hierarchies and proptest strategies.

#![allow(missing_docs)]

use org_hierarchy::{NodeId, RawBrand, RawDesk, RawMember, RawOffice, RawTeam};
use proptest::prelude::*;
use std::cell::Cell;

pub fn member(id: &str, name: &str, email: &str) -> RawMember {
    RawMember {
        user_id: NodeId::new(id),
        full_name: name.to_string(),
        email: email.to_string(),
        role: "agent".to_string(),
        assigned_date: "2024-01-15".to_string(),
    }
}

pub fn team(id: &str, name: &str, is_active: bool, members: Vec<RawMember>) -> RawTeam {
    RawTeam {
        id: NodeId::new(id),
        name: name.to_string(),
        is_active,
        members,
    }
}

pub fn desk(id: &str, name: &str, teams: Vec<RawTeam>) -> RawDesk {
    RawDesk {
        id: NodeId::new(id),
        name: name.to_string(),
        desk_subtype: "sales".to_string(),
        language: "en".to_string(),
        is_active: true,
        teams,
    }
}

pub fn brand(id: &str, name: &str, country: &str, desks: Vec<RawDesk>) -> RawBrand {
    RawBrand {
        id: NodeId::new(id),
        name: name.to_string(),
        country: country.to_string(),
        is_active: true,
        desks,
    }
}

pub fn office(id: &str, name: &str, country: &str, brands: Vec<RawBrand>) -> RawOffice {
    RawOffice {
        id: NodeId::new(id),
        name: name.to_string(),
        country: country.to_string(),
        is_active: true,
        brands,
    }
}

/// Acme → AcmeFX → Sales → Alpha → Jane Doe, ids o1/b1/d1/t1/m1
pub fn acme_chain() -> Vec<RawOffice> {
    vec![office(
        "o1",
        "Acme",
        "Cyprus",
        vec![brand(
            "b1",
            "AcmeFX",
            "Cyprus",
            vec![desk(
                "d1",
                "Sales",
                vec![team("t1", "Alpha", true, vec![member("m1", "Jane Doe", "jane@x.com")])],
            )],
        )],
    )]
}

/// Two offices with several brands, desks, teams and members
pub fn sample_offices() -> Vec<RawOffice> {
    vec![
        office(
            "o1",
            "Limassol",
            "Cyprus",
            vec![
                brand(
                    "b1",
                    "TradeCo",
                    "Cyprus",
                    vec![
                        desk(
                            "d1",
                            "Sales EN",
                            vec![
                                team(
                                    "t1",
                                    "Alpha",
                                    true,
                                    vec![
                                        member("m1", "Jane Doe", "jane@tradeco.com"),
                                        member("m2", "John Smith", "john@tradeco.com"),
                                    ],
                                ),
                                team("t2", "Bravo", false, vec![member("m3", "Ana Lopez", "ana@tradeco.com")]),
                            ],
                        ),
                        desk("d2", "Retention", vec![team("t3", "Charlie", true, vec![])]),
                    ],
                ),
                brand("b2", "Empty Brand", "Greece", vec![]),
            ],
        ),
        office(
            "o2",
            "London",
            "United Kingdom",
            vec![brand(
                "b3",
                "Markets UK",
                "United Kingdom",
                vec![desk(
                    "d3",
                    "Sales DE",
                    vec![team(
                        "t4",
                        "Delta",
                        true,
                        vec![
                            member("m4", "Janet Kraus", "janet@markets.co.uk"),
                            member("m5", "Olga Petrova", "olga@markets.co.uk"),
                        ],
                    )],
                )],
            )],
        ),
    ]
}

/// Raw JSON rendition of [`acme_chain`], as the endpoint would send it
pub const ACME_CHAIN_JSON: &str = r#"[
  {
    "id": "o1", "name": "Acme", "country": "Cyprus", "isActive": true,
    "brands": [
      {
        "id": "b1", "name": "AcmeFX", "country": "Cyprus", "isActive": true,
        "desks": [
          {
            "id": "d1", "name": "Sales", "deskSubtype": "sales", "language": "en", "isActive": true,
            "teams": [
              {
                "id": "t1", "name": "Alpha", "isActive": true,
                "members": [
                  { "userId": "m1", "fullName": "Jane Doe", "email": "jane@x.com",
                    "role": "agent", "assignedDate": "2024-01-15" }
                ]
              }
            ]
          }
        ]
      }
    ]
  }
]"#;

/// Arbitrary hierarchies with globally unique ids
///
/// Ids are assigned after generation so they never collide.
pub fn arb_offices() -> impl Strategy<Value = Vec<RawOffice>> {
    let members = prop::collection::vec("[a-z]{1,8}", 0..4);
    let teams = prop::collection::vec((any::<bool>(), members), 0..3);
    let desks = prop::collection::vec(teams, 0..3);
    let brands = prop::collection::vec(desks, 0..3);
    let offices = prop::collection::vec(brands, 0..3);

    offices.prop_map(|offices| {
        let next = Cell::new(0usize);
        let id = |prefix: &str| {
            next.set(next.get() + 1);
            format!("{prefix}{}", next.get())
        };

        offices
            .into_iter()
            .map(|brands| {
                let oid = id("o");
                let brands = brands
                    .into_iter()
                    .map(|desks| {
                        let bid = id("b");
                        let desks = desks
                            .into_iter()
                            .map(|teams| {
                                let did = id("d");
                                let teams = teams
                                    .into_iter()
                                    .map(|(active, members)| {
                                        let tid = id("t");
                                        let members = members
                                            .into_iter()
                                            .map(|name| {
                                                let mid = id("m");
                                                member(&mid, &name, &format!("{name}@example.com"))
                                            })
                                            .collect();
                                        team(&tid, &format!("team {tid}"), active, members)
                                    })
                                    .collect();
                                desk(&did, &format!("desk {did}"), teams)
                            })
                            .collect();
                        brand(&bid, &format!("brand {bid}"), "Cyprus", desks)
                    })
                    .collect();
                office(&oid, &format!("office {oid}"), "Cyprus", brands)
            })
            .collect()
    })
}
