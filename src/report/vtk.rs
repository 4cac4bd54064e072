use super::*;
use crate::util::*;
use vtkio::model::*;

/// Full cube as hexahedral cells with one scalar per grid point.
pub fn write_vtk3d<P: AsRef<Path>, DomainType: DomainView<3>>(
    domain: &DomainType,
    path: &P,
) -> Result<(), ReportError> {
    tracing::info!("Writing vtk: {:?}", path.as_ref());
    let aabb = domain.aabb();

    // Collect the grid points as vertices in mesh
    let buffer_size = aabb.buffer_size();
    let mut points = Vec::with_capacity(3 * buffer_size);
    for coord in aabb.coord_iter() {
        points.push(coord[0] as f32);
        points.push(coord[1] as f32);
        points.push(coord[2] as f32);
    }

    // Assemble Hexahedron elements from grid points
    let cell_bounds = aabb.cell_bounds();
    let n_cells = cell_bounds.buffer_size();
    let mut connectivity = Vec::with_capacity(8 * n_cells);
    let mut offsets = Vec::with_capacity(n_cells);
    let mut cell_types = Vec::with_capacity(n_cells);
    let mut offset = 8;
    for cell_coord in cell_bounds.coord_iter() {
        let corners: [Coord<3>; 8] = [
            cell_coord,
            cell_coord + vector![1, 0, 0],
            cell_coord + vector![1, 0, 1],
            cell_coord + vector![0, 0, 1],
            cell_coord + vector![0, 1, 0],
            cell_coord + vector![1, 1, 0],
            cell_coord + vector![1, 1, 1],
            cell_coord + vector![0, 1, 1],
        ];
        for v in &corners {
            connectivity.push(aabb.coord_to_linear(v) as u64);
        }

        offsets.push(offset);
        cell_types.push(CellType::Hexahedron);
        offset += 8;
    }

    let data: Vec<f32> = domain.buffer().iter().map(|v| *v as f32).collect();

    Vtk {
        version: Version::Auto,
        title: String::new(),
        byte_order: ByteOrder::LittleEndian,
        file_path: None,
        data: DataSet::inline(UnstructuredGridPiece {
            points: IOBuffer::F32(points),
            cells: Cells {
                cell_verts: VertexNumbers::XML {
                    connectivity,
                    offsets,
                },
                types: cell_types,
            },
            data: Attributes {
                point: vec![Attribute::DataArray(DataArray {
                    name: "temperature".to_string(),
                    elem: ElementType::Scalars {
                        num_comp: 1,
                        lookup_table: None,
                    },
                    data: IOBuffer::F32(data),
                })],
                cell: vec![],
            },
        }),
    }
    .export(path)?;
    Ok(())
}

/// Full cube as `frame_NNNN.vtu`, one file per report.
pub struct VtkReporter {
    output_dir: PathBuf,
    frame: usize,
}

impl VtkReporter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        VtkReporter {
            output_dir: output_dir.as_ref().to_path_buf(),
            frame: 0,
        }
    }
}

impl Reporter<3> for VtkReporter {
    fn report(
        &mut self,
        domain: &OwnedDomain<3>,
        _time: f64,
    ) -> Result<(), ReportError> {
        profiling::scope!("report::vtk");
        let path = frame_path(&self.output_dir, self.frame, "vtu");
        write_vtk3d(domain, &path)?;
        self.frame += 1;
        Ok(())
    }
}
