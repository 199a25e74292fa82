use super::{Facet, FemMesh};
use gemlab::mesh::{Cell, Mesh, Point};
use gemlab::shapes::GeoKind;
use std::collections::BTreeMap;

pub struct SampleMeshes {}

impl SampleMeshes {
    #[rustfmt::skip]
    pub fn two_tri3() -> FemMesh {
        //      y      Top(3)
        // 1.0  3------------2
        //      |`.      [1] |    [#] indicates id
        //      |  `.    (1) |    (#) indicates attribute
        //      |    `.      |
        // Left |      `.    | Right
        //  (4) | [0]    `.  |  (2)
        //      | (1)      `.|
        // 0.0  0------------1 -> x
        //     0.0 Bottom(1) 1.0
        let mesh = Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, marker: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, marker: 0, coords: vec![1.0, 0.0] },
                Point { id: 2, marker: 0, coords: vec![1.0, 1.0] },
                Point { id: 3, marker: 0, coords: vec![0.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Tri3, points: vec![0, 1, 3] },
                Cell { id: 1, attribute: 1, kind: GeoKind::Tri3, points: vec![2, 3, 1] },
            ],
        };
        FemMesh {
            mesh,
            facets: unit_square_facets(),
            facet_markers: unit_square_facet_markers(),
            cell_markers: BTreeMap::from([("Screed".to_string(), 1)]),
        }
    }

    #[rustfmt::skip]
    pub fn four_tri3() -> FemMesh {
        //      y      Top(3)
        // 1.0  3------------2
        //      |`.  [2]  .' |    [#] indicates id
        //      |  `.   .'   |    (#) indicates attribute
        // Left |[3] `4'  [1]| Right
        //  (4) |   .' `.    |  (2)
        //      | .' [0] `.  |
        // 0.0  0------------1 -> x
        //     0.0 Bottom(1) 1.0
        //
        // all cells have attribute (1)
        let mesh = Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, marker: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, marker: 0, coords: vec![1.0, 0.0] },
                Point { id: 2, marker: 0, coords: vec![1.0, 1.0] },
                Point { id: 3, marker: 0, coords: vec![0.0, 1.0] },
                Point { id: 4, marker: 0, coords: vec![0.5, 0.5] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Tri3, points: vec![0, 1, 4] },
                Cell { id: 1, attribute: 1, kind: GeoKind::Tri3, points: vec![1, 2, 4] },
                Cell { id: 2, attribute: 1, kind: GeoKind::Tri3, points: vec![2, 3, 4] },
                Cell { id: 3, attribute: 1, kind: GeoKind::Tri3, points: vec![3, 0, 4] },
            ],
        };
        FemMesh {
            mesh,
            facets: unit_square_facets(),
            facet_markers: unit_square_facet_markers(),
            cell_markers: BTreeMap::from([("Screed".to_string(), 1)]),
        }
    }
}

#[rustfmt::skip]
fn unit_square_facets() -> Vec<Facet> {
    vec![
        Facet { marker: 1, points: vec![0, 1] },
        Facet { marker: 2, points: vec![1, 2] },
        Facet { marker: 3, points: vec![2, 3] },
        Facet { marker: 4, points: vec![3, 0] },
    ]
}

fn unit_square_facet_markers() -> BTreeMap<String, usize> {
    BTreeMap::from([
        ("Bottom".to_string(), 1),
        ("Right".to_string(), 2),
        ("Top".to_string(), 3),
        ("Left".to_string(), 4),
    ])
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
